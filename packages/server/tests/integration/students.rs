use serde_json::json;

use crate::common::{TestApp, routes};

fn valid_student_body(name: &str) -> serde_json::Value {
    json!({
        "name": name,
        "batch": "2024",
        "academic_performance": 80,
        "hackathon_participation": 2,
        "papers_presented": 1,
    })
}

mod student_creation {
    use super::*;

    #[tokio::test]
    async fn creates_and_scores_a_student() {
        let app = TestApp::spawn().await;
        app.seed_history().await;

        let res = app
            .post_json(routes::STUDENTS, &valid_student_body("Alan"))
            .await;

        assert_eq!(res.status, 201, "unexpected body: {}", res.text);
        assert!(res.body["id"].as_i64().is_some());
        assert_eq!(res.body["name"], "Alan");
        assert_eq!(res.body["batch"], "2024");
        assert_eq!(res.body["academic_performance"], 80);
        assert!(res.body["overall_score"].as_f64().is_some_and(f64::is_finite));
        // Seven rows leave two for evaluation, so r2 is defined.
        assert!(res.body["r_squared"].as_f64().is_some());
    }

    #[tokio::test]
    async fn identical_tables_give_identical_predictions() {
        let first = TestApp::spawn().await;
        let second = TestApp::spawn().await;
        first.seed_history().await;
        second.seed_history().await;

        let a = first
            .post_json(routes::STUDENTS, &valid_student_body("Alan"))
            .await;
        let b = second
            .post_json(routes::STUDENTS, &valid_student_body("Alan"))
            .await;

        assert_eq!(a.status, 201);
        assert_eq!(b.status, 201);
        assert_eq!(a.body["overall_score"], b.body["overall_score"]);
    }

    #[tokio::test]
    async fn first_student_cannot_be_scored() {
        let app = TestApp::spawn().await;

        let res = app
            .post_json(routes::STUDENTS, &valid_student_body("Alan"))
            .await;

        assert_eq!(res.status, 422);
        assert_eq!(res.body["code"], "SCORING_FAILED");
        assert_eq!(app.student_count().await, 1);
    }
}

mod student_validation {
    use super::*;

    #[tokio::test]
    async fn rejects_empty_name() {
        let app = TestApp::spawn().await;

        let res = app.post_json(routes::STUDENTS, &valid_student_body("")).await;

        assert_eq!(res.status, 400);
        assert_eq!(res.body["code"], "VALIDATION_ERROR");
        assert_eq!(app.student_count().await, 0);
    }

    #[tokio::test]
    async fn rejects_negative_metrics() {
        let app = TestApp::spawn().await;
        let mut body = valid_student_body("Alan");
        body["papers_presented"] = json!(-1);

        let res = app.post_json(routes::STUDENTS, &body).await;

        assert_eq!(res.status, 400);
        assert_eq!(res.body["code"], "VALIDATION_ERROR");
        assert_eq!(app.student_count().await, 0);
    }

    #[tokio::test]
    async fn rejects_missing_fields() {
        let app = TestApp::spawn().await;

        let res = app
            .post_json(routes::STUDENTS, &json!({ "name": "Alan", "batch": "2024" }))
            .await;

        assert_eq!(res.status, 400);
        assert_eq!(res.body["code"], "VALIDATION_ERROR");
        let message = res.body["message"].as_str().unwrap();
        assert!(message.starts_with("Malformed JSON body:"), "{message}");
        assert!(message.contains("academic_performance"), "{message}");
        assert_eq!(app.student_count().await, 0);
    }
}

mod student_listing {
    use super::*;

    #[tokio::test]
    async fn lists_every_student_oldest_first() {
        let app = TestApp::spawn().await;
        app.seed_student("Ada", "2023", [92, 4, 2], Some(88.0)).await;
        app.seed_student("Linus", "2023", [70, 1, 0], None).await;

        let res = app.get(routes::STUDENTS).await;

        assert_eq!(res.status, 200);
        let data = res.body.as_array().expect("body should be array");
        assert_eq!(data.len(), 2);
        assert_eq!(data[0]["name"], "Ada");
        assert_eq!(data[0]["overall_score"], 88.0);
        assert_eq!(data[1]["name"], "Linus");
        assert!(data[1]["overall_score"].is_null());
    }
}

mod leaderboard {
    use super::*;

    async fn seed_scores(app: &TestApp) {
        for (name, score) in [("Ten", 10.0), ("Ninety", 90.0), ("Fifty", 50.0), ("Seventy", 70.0)] {
            app.seed_student(name, "A", [1, 1, 1], Some(score)).await;
        }
    }

    fn scores(body: &serde_json::Value) -> Vec<f64> {
        body.as_array()
            .expect("body should be array")
            .iter()
            .map(|e| e["overall_score"].as_f64().unwrap())
            .collect()
    }

    #[tokio::test]
    async fn returns_top_three_by_default() {
        let app = TestApp::spawn().await;
        seed_scores(&app).await;

        let res = app.get(routes::STUDENTS_TOP).await;

        assert_eq!(res.status, 200);
        assert_eq!(scores(&res.body), vec![90.0, 70.0, 50.0]);
        assert_eq!(res.body[0]["name"], "Ninety");
    }

    #[tokio::test]
    async fn honours_limit() {
        let app = TestApp::spawn().await;
        seed_scores(&app).await;

        let res = app
            .get(&format!("{}?limit=2", routes::STUDENTS_TOP))
            .await;

        assert_eq!(scores(&res.body), vec![90.0, 70.0]);
    }

    #[tokio::test]
    async fn rejects_out_of_range_limit() {
        let app = TestApp::spawn().await;

        for limit in [0, 101] {
            let res = app
                .get(&format!("{}?limit={limit}", routes::STUDENTS_TOP))
                .await;
            assert_eq!(res.status, 400);
            assert_eq!(res.body["code"], "VALIDATION_ERROR");
        }
    }

    #[tokio::test]
    async fn unscored_students_rank_last() {
        let app = TestApp::spawn().await;
        app.seed_student("Pending", "A", [1, 1, 1], None).await;
        app.seed_student("Low", "A", [1, 1, 1], Some(-5.0)).await;

        let res = app.get(routes::STUDENTS_TOP).await;

        let data = res.body.as_array().expect("body should be array");
        assert_eq!(data.len(), 2);
        assert_eq!(data[0]["name"], "Low");
        assert_eq!(data[1]["name"], "Pending");
        assert!(data[1]["overall_score"].is_null());
    }

    #[tokio::test]
    async fn ties_keep_insertion_order() {
        let app = TestApp::spawn().await;
        for name in ["First", "Second", "Third", "Fourth"] {
            app.seed_student(name, "A", [1, 1, 1], Some(60.0)).await;
        }

        let res = app.get(routes::STUDENTS_TOP).await;

        let names: Vec<&str> = res
            .body
            .as_array()
            .unwrap()
            .iter()
            .map(|e| e["name"].as_str().unwrap())
            .collect();
        assert_eq!(names, vec!["First", "Second", "Third"]);
    }
}

#[tokio::test]
async fn unknown_route_is_not_found() {
    let app = TestApp::spawn().await;

    let res = app.get("/api/v1/nope").await;

    assert_eq!(res.status, 404);
    assert_eq!(res.body["code"], "NOT_FOUND");
}
