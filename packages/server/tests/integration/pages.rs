use server::config::ScoringConfig;

use crate::common::{TestApp, form_fields, routes};

mod form_page {
    use super::*;

    #[tokio::test]
    async fn renders_the_submission_form() {
        let app = TestApp::spawn().await;

        let res = app.get(routes::INDEX).await;

        assert_eq!(res.status, 200);
        for field in ["studentName", "batch", "academicPerformance", "hackathons", "papers"] {
            assert!(res.text.contains(&format!("name=\"{field}\"")), "missing {field}");
        }
    }

    #[tokio::test]
    async fn submit_redirects_to_the_form() {
        let app = TestApp::spawn().await;
        app.seed_history().await;

        let res = app
            .submit_form_raw(&form_fields("Alan", "2024", "80", "2", "1"))
            .await;

        assert_eq!(res.status, 303);
        assert_eq!(res.location.as_deref(), Some("/"));
    }

    #[tokio::test]
    async fn flash_is_shown_only_once() {
        let app = TestApp::spawn().await;
        app.seed_history().await;

        let res = app
            .submit_form(&form_fields("Alan", "2024", "80", "2", "1"))
            .await;
        assert!(res.text.contains("Student Alan submitted"));

        let res = app.get(routes::INDEX).await;
        assert!(!res.text.contains("Student Alan submitted"));
    }
}

mod submission {
    use super::*;

    #[tokio::test]
    async fn valid_submission_is_stored_and_scored() {
        let app = TestApp::spawn().await;
        app.seed_history().await;
        let before = app.student_count().await;

        let res = app
            .submit_form(&form_fields("Alan", "2024", "80", "2", "1"))
            .await;

        assert_eq!(res.status, 200);
        assert!(
            res.text
                .contains("Student Alan submitted with predicted overall score: "),
            "unexpected page: {}",
            res.text
        );
        assert_eq!(app.student_count().await, before + 1);

        let students = app.students().await;
        let alan = students.last().unwrap();
        assert_eq!(alan.name, "Alan");
        assert_eq!(alan.academic_performance, 80);
        assert!(alan.overall_score.is_some_and(f64::is_finite));
    }

    #[tokio::test]
    async fn one_prior_row_is_enough_to_score() {
        let app = TestApp::spawn().await;
        app.seed_student("Ada", "2023", [92, 4, 2], Some(88.0)).await;

        let res = app
            .submit_form(&form_fields("Alan", "2024", "80", "2", "1"))
            .await;

        assert!(res.text.contains("predicted overall score"));
        let students = app.students().await;
        assert_eq!(students.len(), 2);
        assert!(students[1].overall_score.is_some_and(f64::is_finite));
    }

    #[tokio::test]
    async fn first_submission_reports_insufficient_data() {
        let app = TestApp::spawn().await;

        let res = app
            .submit_form(&form_fields("Alan", "2024", "80", "2", "1"))
            .await;

        assert!(res.text.contains("An error occurred: Not enough records"));
        // The insert is committed before scoring, so the row stays unscored.
        let students = app.students().await;
        assert_eq!(students.len(), 1);
        assert_eq!(students[0].overall_score, None);
    }

    #[tokio::test]
    async fn duplicate_name_and_batch_only_scores_newest_row() {
        let app = TestApp::spawn().await;
        app.seed_history().await;
        let older = app.seed_student("Alan", "2024", [50, 0, 0], Some(12.0)).await;

        app.submit_form(&form_fields("Alan", "2024", "80", "2", "1"))
            .await;

        // Scores are matched by (name, batch), so the older row is left alone.
        let students = app.students().await;
        let older = students.iter().find(|s| s.id == older).unwrap();
        assert_eq!(older.overall_score, Some(12.0));
        let newest = students.last().unwrap();
        assert_eq!(newest.name, "Alan");
        assert!(newest.overall_score.is_some());
    }
}

mod validation {
    use super::*;

    #[tokio::test]
    async fn non_digit_metrics_are_rejected_without_storing() {
        let app = TestApp::spawn().await;
        app.seed_history().await;
        let before = app.student_count().await;

        for bad in ["abc", "-1", "1.5", " 7", ""] {
            let res = app
                .submit_form(&form_fields("Alan", "2024", "80", bad, "1"))
                .await;

            assert!(
                res.text
                    .contains("Hackathon participation must be a whole number of zero or more"),
                "input {bad:?} was not rejected"
            );
        }

        assert_eq!(app.student_count().await, before);
    }

    #[tokio::test]
    async fn empty_name_is_rejected() {
        let app = TestApp::spawn().await;
        app.seed_history().await;
        let before = app.student_count().await;

        let res = app.submit_form(&form_fields("", "2024", "80", "2", "1")).await;

        assert!(res.text.contains("Student name is required"));
        assert_eq!(app.student_count().await, before);
    }

    #[tokio::test]
    async fn missing_batch_field_is_rejected() {
        let app = TestApp::spawn().await;
        app.seed_history().await;
        let before = app.student_count().await;

        let res = app
            .submit_form(&[
                ("studentName", "Alan"),
                ("academicPerformance", "80"),
                ("hackathons", "2"),
                ("papers", "1"),
            ])
            .await;

        assert!(res.text.contains("Batch is required"));
        assert_eq!(app.student_count().await, before);
    }
}

mod leaderboard {
    use super::*;

    #[tokio::test]
    async fn shows_top_three_in_descending_order() {
        let app = TestApp::spawn().await;
        app.seed_student("Ten", "A", [1, 0, 0], Some(10.0)).await;
        app.seed_student("Ninety", "A", [9, 0, 0], Some(90.0)).await;
        app.seed_student("Fifty", "A", [5, 0, 0], Some(50.0)).await;
        app.seed_student("Seventy", "A", [7, 0, 0], Some(70.0)).await;

        let res = app.get(routes::TOP_STUDENTS).await;

        assert_eq!(res.status, 200);
        let ninety = res.text.find("Ninety").expect("Ninety listed");
        let seventy = res.text.find("Seventy").expect("Seventy listed");
        let fifty = res.text.find("Fifty").expect("Fifty listed");
        assert!(ninety < seventy && seventy < fifty);
        assert!(!res.text.contains("Ten"));
        assert!(res.text.contains("90.00"));
    }

    #[tokio::test]
    async fn respects_configured_size() {
        let app = TestApp::spawn_with(ScoringConfig {
            leaderboard_size: 1,
            ..ScoringConfig::default()
        })
        .await;
        app.seed_student("Ninety", "A", [9, 0, 0], Some(90.0)).await;
        app.seed_student("Seventy", "A", [7, 0, 0], Some(70.0)).await;

        let html = app.get(routes::TOP_STUDENTS).await;
        let api = app.get(routes::STUDENTS_TOP).await;

        assert!(html.text.contains("Ninety"));
        assert!(!html.text.contains("Seventy"));
        let names: Vec<&str> = api
            .body
            .as_array()
            .expect("leaderboard array")
            .iter()
            .filter_map(|entry| entry["name"].as_str())
            .collect();
        assert_eq!(names, ["Ninety"]);
    }

    #[tokio::test]
    async fn empty_table_renders() {
        let app = TestApp::spawn().await;

        let res = app.get(routes::TOP_STUDENTS).await;

        assert_eq!(res.status, 200);
        assert!(res.text.contains("No students yet."));
    }
}
