pub const INSERT_JOB: &str = "
    INSERT INTO job (title, company, location)
    VALUES (?1, ?2, ?3)
";

pub const UPDATE_JOB: &str = "
    UPDATE job
    SET title = ?2, company = ?3, location = ?4
    WHERE id = ?1
";

pub const DELETE_JOB: &str = "
    DELETE FROM job
    WHERE id = ?1
";

pub const GET_ALL_JOBS: &str = "
    SELECT id, title, company, location
    FROM job
    ORDER BY id
";

pub const GET_JOB_BY_ID: &str = "
    SELECT id, title, company, location
    FROM job
    WHERE id = ?1
";

pub const SEARCH_JOBS: &str = "
    SELECT id, title, company, location
    FROM job
    WHERE COALESCE(title, '') LIKE ?1 ESCAPE '\\'
       OR COALESCE(company, '') LIKE ?1 ESCAPE '\\'
       OR COALESCE(location, '') LIKE ?1 ESCAPE '\\'
    ORDER BY id
";
