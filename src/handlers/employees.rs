use actix_web::{get, post, web, HttpResponse};

use crate::database::Storage;
use crate::employee::{Employee, EmployeeForm};
use crate::errors::JobdeskError;
use crate::job::Job;
use crate::views::{self, JobOption};
use crate::Context;

#[get("/employees")]
pub async fn list(storage: Storage) -> Result<HttpResponse, JobdeskError> {
    let employees = Employee::all_with_job(&storage).await?;

    views::render(views::Employees { employees })
}

#[get("/employees/create")]
pub async fn create_form(storage: Storage) -> Result<HttpResponse, JobdeskError> {
    let jobs = Job::all(&storage).await?;

    views::render(views::CreateEmployee {
        jobs: JobOption::list(jobs, None),
    })
}

#[post("/employees/create")]
pub async fn create(
    storage: Storage,
    ctx: web::Data<Context>,
    form: web::Form<EmployeeForm>,
) -> Result<HttpResponse, JobdeskError> {
    let form = form.into_inner();
    check_job(&storage, &ctx, &form).await?;

    let employee = Employee::create(&storage, form).await?;
    info!("Created employee {}", employee.id);

    Ok(views::redirect("/employees"))
}

#[get("/employees/update/{id}")]
pub async fn update_form(
    storage: Storage,
    id: web::Path<i64>,
) -> Result<HttpResponse, JobdeskError> {
    let employee = Employee::find(&storage, id.into_inner()).await?;
    let jobs = Job::all(&storage).await?;

    views::render(views::UpdateEmployee {
        jobs: JobOption::list(jobs, employee.job_id),
        employee,
    })
}

#[post("/employees/update/{id}")]
pub async fn update(
    storage: Storage,
    ctx: web::Data<Context>,
    id: web::Path<i64>,
    form: web::Form<EmployeeForm>,
) -> Result<HttpResponse, JobdeskError> {
    let mut employee = Employee::find(&storage, id.into_inner()).await?;
    let form = form.into_inner();
    check_job(&storage, &ctx, &form).await?;

    employee.update(&storage, form).await?;
    info!("Updated employee {}", employee.id);

    Ok(views::redirect("/employees"))
}

#[post("/employees/delete/{id}")]
pub async fn delete(
    storage: Storage,
    id: web::Path<i64>,
) -> Result<HttpResponse, JobdeskError> {
    let employee = Employee::find(&storage, id.into_inner()).await?;
    let id = employee.id;
    employee.delete(&storage).await?;
    info!("Deleted employee {}", id);

    Ok(views::redirect("/employees"))
}

/// Only enforced when `validate_employee_job` is on, otherwise any `job_id`
/// is stored as submitted.
async fn check_job(
    storage: &Storage,
    ctx: &Context,
    form: &EmployeeForm,
) -> Result<(), JobdeskError> {
    if !ctx.policy.validate_employee_job {
        return Ok(());
    }

    if let Some(id) = form.job_id {
        if Job::get(storage, id).await?.is_none() {
            return Err(JobdeskError::UnknownJob { id });
        }
    }

    Ok(())
}

#[cfg(test)]
mod test {
    use actix_web::http::{header, StatusCode};
    use actix_web::{test, App};

    use crate::config::Policy;
    use crate::employee::{Employee, EmployeeForm};
    use crate::handlers::configure;
    use crate::handlers::testing::TestData;
    use crate::job::{Job, JobForm};

    fn alice(job_id: Option<i64>) -> EmployeeForm {
        EmployeeForm {
            name: "Alice".to_owned(),
            email: "a@x.com".to_owned(),
            job_id,
        }
    }

    async fn engineer(data: &TestData) -> Job {
        Job::create(
            &data.storage(),
            JobForm {
                title: "Engineer".to_owned(),
                company: "Acme".to_owned(),
                location: "Cairo".to_owned(),
            },
        )
        .await
        .unwrap()
    }

    #[actix_rt::test]
    async fn test_create_employee() {
        let data = TestData::default();
        let job = engineer(&data).await;
        let app = test::init_service(
            App::new()
                .app_data(data.database.clone())
                .app_data(data.context.clone())
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::get().uri("/employees/create").to_request();
        let body = test::call_and_read_body(&app, req).await;
        let expected = format!(r#"<option value="{}">Engineer</option>"#, job.id);
        assert!(String::from_utf8(body.to_vec()).unwrap().contains(&expected));

        let req = test::TestRequest::post()
            .uri("/employees/create")
            .set_form(&alice(Some(job.id)))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::FOUND);
        assert_eq!(
            res.headers().get(header::LOCATION).unwrap().to_str().unwrap(),
            "/employees"
        );

        let employees = Employee::all(&data.storage()).await.unwrap();
        assert_eq!(employees.len(), 1);
        assert_eq!(employees[0].name(), "Alice");
        assert_eq!(employees[0].job_id, Some(job.id));

        let req = test::TestRequest::get().uri("/employees").to_request();
        let body = test::call_and_read_body(&app, req).await;
        assert!(String::from_utf8(body.to_vec())
            .unwrap()
            .contains("<td>Engineer</td>"));
    }

    #[actix_rt::test]
    async fn test_create_employee_without_job() {
        let data = TestData::default();
        let app = test::init_service(
            App::new()
                .app_data(data.database.clone())
                .app_data(data.context.clone())
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/employees/create")
            .set_form(&[("name", "Bob"), ("email", "b@x.com"), ("job_id", "")])
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::FOUND);

        let employees = Employee::all(&data.storage()).await.unwrap();
        assert_eq!(employees[0].job_id, None);
    }

    #[actix_rt::test]
    async fn test_unknown_job_is_stored_by_default() {
        let data = TestData::default();
        let app = test::init_service(
            App::new()
                .app_data(data.database.clone())
                .app_data(data.context.clone())
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/employees/create")
            .set_form(&alice(Some(77)))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::FOUND);

        let employees = Employee::all(&data.storage()).await.unwrap();
        assert_eq!(employees[0].job_id, Some(77));
    }

    #[actix_rt::test]
    async fn test_unknown_job_is_rejected_when_validated() {
        let data = TestData::new(Policy {
            validate_employee_job: true,
            ..Policy::default()
        });
        let job = engineer(&data).await;
        let employee = Employee::create(&data.storage(), alice(Some(job.id)))
            .await
            .unwrap();
        let app = test::init_service(
            App::new()
                .app_data(data.database.clone())
                .app_data(data.context.clone())
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/employees/create")
            .set_form(&alice(Some(77)))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let req = test::TestRequest::post()
            .uri(&format!("/employees/update/{}", employee.id))
            .set_form(&alice(Some(77)))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);

        assert_eq!(Employee::all(&data.storage()).await.unwrap(), vec![employee]);
    }

    #[actix_rt::test]
    async fn test_update_employee() {
        let data = TestData::default();
        let job = engineer(&data).await;
        let employee = Employee::create(&data.storage(), alice(None)).await.unwrap();
        let app = test::init_service(
            App::new()
                .app_data(data.database.clone())
                .app_data(data.context.clone())
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::get()
            .uri(&format!("/employees/update/{}", employee.id))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::OK);

        let form = EmployeeForm {
            name: "Alice B".to_owned(),
            email: "alice@x.com".to_owned(),
            job_id: Some(job.id),
        };
        let req = test::TestRequest::post()
            .uri(&format!("/employees/update/{}", employee.id))
            .set_form(&form)
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::FOUND);

        let updated = Employee::find(&data.storage(), employee.id).await.unwrap();
        assert_eq!(updated.name(), "Alice B");
        assert_eq!(updated.email(), "alice@x.com");
        assert_eq!(updated.job_id, Some(job.id));

        let req = test::TestRequest::get()
            .uri(&format!("/employees/update/{}", employee.id))
            .to_request();
        let body = test::call_and_read_body(&app, req).await;
        let expected = format!(r#"<option value="{}" selected>Engineer</option>"#, job.id);
        assert!(String::from_utf8(body.to_vec()).unwrap().contains(&expected));
    }

    #[actix_rt::test]
    async fn test_update_keeps_missing_job() {
        let data = TestData::default();
        let job = engineer(&data).await;
        let employee = Employee::create(&data.storage(), alice(Some(77)))
            .await
            .unwrap();
        let app = test::init_service(
            App::new()
                .app_data(data.database.clone())
                .app_data(data.context.clone())
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::get()
            .uri(&format!("/employees/update/{}", employee.id))
            .to_request();
        let body = String::from_utf8(test::call_and_read_body(&app, req).await.to_vec()).unwrap();
        assert!(body.contains(r#"<option value="77" selected>#77 (missing)</option>"#));
        let engineer = format!(r#"<option value="{}">Engineer</option>"#, job.id);
        assert!(body.contains(&engineer));

        // what the browser submits for the untouched select
        let req = test::TestRequest::post()
            .uri(&format!("/employees/update/{}", employee.id))
            .set_form(&[("name", "Alice B"), ("email", "a@x.com"), ("job_id", "77")])
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::FOUND);

        let updated = Employee::find(&data.storage(), employee.id).await.unwrap();
        assert_eq!(updated.name(), "Alice B");
        assert_eq!(updated.job_id, Some(77));
    }

    #[actix_rt::test]
    async fn test_delete_employee() {
        let data = TestData::default();
        let employee = Employee::create(&data.storage(), alice(None)).await.unwrap();
        let app = test::init_service(
            App::new()
                .app_data(data.database.clone())
                .app_data(data.context.clone())
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::post()
            .uri(&format!("/employees/delete/{}", employee.id))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::FOUND);
        assert!(Employee::all(&data.storage()).await.unwrap().is_empty());

        let req = test::TestRequest::post()
            .uri(&format!("/employees/delete/{}", employee.id))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::NOT_FOUND);

        let req = test::TestRequest::get().uri("/employees/update/1234").to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
    }
}
