pub const INSERT_EMPLOYEE: &str = "
    INSERT INTO employee (name, email, job_id)
    VALUES (?1, ?2, ?3)
";

pub const UPDATE_EMPLOYEE: &str = "
    UPDATE employee
    SET name = ?2, email = ?3, job_id = ?4
    WHERE id = ?1
";

pub const DELETE_EMPLOYEE: &str = "
    DELETE FROM employee
    WHERE id = ?1
";

pub const DELETE_EMPLOYEES_BY_JOB: &str = "
    DELETE FROM employee
    WHERE job_id = ?1
";

pub const COUNT_EMPLOYEES_BY_JOB: &str = "
    SELECT COUNT(*)
    FROM employee
    WHERE job_id = ?1
";

pub const GET_ALL_EMPLOYEES: &str = "
    SELECT id, name, email, job_id
    FROM employee
    ORDER BY id
";

pub const GET_ALL_EMPLOYEES_WITH_JOB: &str = "
    SELECT employee.id, employee.name, employee.email, employee.job_id, job.id, job.title
    FROM employee
    LEFT JOIN job ON job.id = employee.job_id
    ORDER BY employee.id
";

pub const GET_EMPLOYEE_BY_ID: &str = "
    SELECT id, name, email, job_id
    FROM employee
    WHERE id = ?1
";

pub const GET_EMPLOYEES_BY_JOB: &str = "
    SELECT id, name, email, job_id
    FROM employee
    WHERE job_id = ?1
    ORDER BY id
";

pub const SEARCH_EMPLOYEES: &str = "
    SELECT id, name, email, job_id
    FROM employee
    WHERE COALESCE(name, '') LIKE ?1 ESCAPE '\\'
       OR COALESCE(email, '') LIKE ?1 ESCAPE '\\'
    ORDER BY id
";
