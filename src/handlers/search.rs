use actix_web::{get, web, HttpResponse};
use serde::Deserialize;

use crate::database::Storage;
use crate::errors::JobdeskError;
use crate::views;

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    q: String,
}

#[get("/search")]
pub async fn search(
    storage: Storage,
    params: web::Query<SearchParams>,
) -> Result<HttpResponse, JobdeskError> {
    let results = crate::search::run(&storage, &params.q).await?;

    views::render(views::Search::from(results))
}

#[cfg(test)]
mod test {
    use actix_web::http::StatusCode;
    use actix_web::{test, App};

    use crate::employee::{Employee, EmployeeForm};
    use crate::handlers::configure;
    use crate::handlers::testing::TestData;
    use crate::job::{Job, JobForm};

    async fn seed(data: &TestData) {
        let storage = data.storage();
        let job = Job::create(
            &storage,
            JobForm {
                title: "Engineer".to_owned(),
                company: "Acme".to_owned(),
                location: "Cairo".to_owned(),
            },
        )
        .await
        .unwrap();
        Employee::create(
            &storage,
            EmployeeForm {
                name: "Alice".to_owned(),
                email: "a@x.com".to_owned(),
                job_id: Some(job.id),
            },
        )
        .await
        .unwrap();
    }

    #[actix_rt::test]
    async fn test_search_without_query_lists_everything() {
        let data = TestData::default();
        seed(&data).await;
        let app = test::init_service(
            App::new()
                .app_data(data.database.clone())
                .app_data(data.context.clone())
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::get().uri("/search").to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::OK);

        let body = String::from_utf8(test::read_body(res).await.to_vec()).unwrap();
        assert!(body.contains("Engineer at Acme, Cairo"));
        assert!(body.contains("Alice &lt;a@x.com&gt;"));
    }

    #[actix_rt::test]
    async fn test_search_without_match() {
        let data = TestData::default();
        seed(&data).await;
        let app = test::init_service(
            App::new()
                .app_data(data.database.clone())
                .app_data(data.context.clone())
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::get().uri("/search?q=nobody").to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::OK);

        let body = String::from_utf8(test::read_body(res).await.to_vec()).unwrap();
        assert!(body.contains("No jobs found."));
        assert!(body.contains("No employees found."));
        assert!(body.contains(r#"value="nobody""#));
    }
}
