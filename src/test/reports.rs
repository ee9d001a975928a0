#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveTime};

    use crate::db::{
        create_absence, get_attendance_by_trainer, get_attendance_report, get_competition_report,
        get_training_schedule_report,
    };
    use crate::models::AttendanceReport;
    use crate::test::test_utils::{
        TestDbBuilder, at, create_standard_test_db, days_ago, days_ahead,
    };

    #[rocket::async_test]
    async fn test_attendance_counts_past_sessions_as_attended() {
        let test_db = TestDbBuilder::new()
            .team("Falcons", "A")
            .trainer("Ivanov", 45)
            .student("Petrov", 16, "Falcons")
            .team_trainer("Falcons", "Ivanov")
            .train("monday", "Hall 1", days_ago(7), "Ivanov", "Falcons")
            .train("wednesday", "Hall 1", days_ago(5), "Ivanov", "Falcons")
            .train("friday", "Hall 2", days_ago(3), "Ivanov", "Falcons")
            .train("next week", "Hall 2", days_ahead(4), "Ivanov", "Falcons")
            .build()
            .await
            .unwrap();

        let report = get_attendance_report(&test_db.pool, test_db.student_id("Petrov"))
            .await
            .unwrap();

        assert_eq!(
            report,
            AttendanceReport {
                trainer_name: "Ivanov".into(),
                student_name: "Petrov".into(),
                team_name: "Falcons".into(),
                attended_trainings: 3,
                missed_trainings: 0,
            }
        );
    }

    #[rocket::async_test]
    async fn test_absence_moves_session_to_missed() {
        let test_db = TestDbBuilder::new()
            .team("Falcons", "A")
            .trainer("Ivanov", 45)
            .student("Petrov", 16, "Falcons")
            .student("Kozlov", 16, "Falcons")
            .team_trainer("Falcons", "Ivanov")
            .train("monday", "Hall 1", days_ago(7), "Ivanov", "Falcons")
            .train("wednesday", "Hall 1", days_ago(5), "Ivanov", "Falcons")
            .train("friday", "Hall 2", days_ago(3), "Ivanov", "Falcons")
            .absence("wednesday", "Petrov")
            .build()
            .await
            .unwrap();

        let petrov = get_attendance_report(&test_db.pool, test_db.student_id("Petrov"))
            .await
            .unwrap();
        assert_eq!(petrov.attended_trainings, 2);
        assert_eq!(petrov.missed_trainings, 1);

        // Someone else's absence does not count against this student.
        let kozlov = get_attendance_report(&test_db.pool, test_db.student_id("Kozlov"))
            .await
            .unwrap();
        assert_eq!(kozlov.attended_trainings, 3);
        assert_eq!(kozlov.missed_trainings, 0);
    }

    #[rocket::async_test]
    async fn test_absence_for_future_session_is_ignored() {
        let test_db = TestDbBuilder::new()
            .team("Falcons", "A")
            .trainer("Ivanov", 45)
            .student("Petrov", 16, "Falcons")
            .team_trainer("Falcons", "Ivanov")
            .train("monday", "Hall 1", days_ago(2), "Ivanov", "Falcons")
            .train("next week", "Hall 1", days_ahead(5), "Ivanov", "Falcons")
            .build()
            .await
            .unwrap();

        create_absence(
            &test_db.pool,
            test_db.train_id("next week"),
            test_db.student_id("Petrov"),
        )
        .await
        .unwrap();

        let report = get_attendance_report(&test_db.pool, test_db.student_id("Petrov"))
            .await
            .unwrap();
        assert_eq!(report.attended_trainings, 1);
        assert_eq!(report.missed_trainings, 0);
    }

    #[rocket::async_test]
    async fn test_attendance_has_one_row_per_trainer() {
        let test_db = create_standard_test_db().await;
        let petrov = test_db.student_id("Petrov");

        let rows = get_attendance_by_trainer(&test_db.pool, petrov, at(2025, 3, 20, 0, 0))
            .await
            .unwrap();

        let summary: Vec<(&str, i64, i64)> = rows
            .iter()
            .map(|r| {
                (
                    r.trainer_name.as_str(),
                    r.attended_trainings,
                    r.missed_trainings,
                )
            })
            .collect();
        assert_eq!(summary, vec![("Andreev", 1, 0), ("Ivanov", 1, 0)]);

        // Before the first session only the names resolve.
        let rows = get_attendance_by_trainer(&test_db.pool, petrov, at(2025, 3, 1, 0, 0))
            .await
            .unwrap();
        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|r| r.attended_trainings == 0));
        assert!(rows.iter().all(|r| r.team_name == "Falcons"));
    }

    #[rocket::async_test]
    async fn test_attendance_report_keeps_first_of_several_trainers() {
        let test_db = create_standard_test_db().await;
        let petrov = test_db.student_id("Petrov");

        let rows = get_attendance_by_trainer(&test_db.pool, petrov, days_ahead(1))
            .await
            .unwrap();
        assert_eq!(rows.len(), 2);

        let report = get_attendance_report(&test_db.pool, petrov).await.unwrap();
        assert_eq!(report, rows[0]);
        assert_eq!(report.trainer_name, "Andreev");
    }

    #[rocket::async_test]
    async fn test_attendance_without_trainer_is_zero_valued() {
        let test_db = create_standard_test_db().await;

        let orlov = get_attendance_report(&test_db.pool, test_db.student_id("Orlov"))
            .await
            .unwrap();
        assert_eq!(orlov, AttendanceReport::default());

        let unknown = get_attendance_report(&test_db.pool, 9999).await.unwrap();
        assert_eq!(unknown, AttendanceReport::default());
    }

    #[rocket::async_test]
    async fn test_competition_report_is_sorted_by_date() {
        let test_db = create_standard_test_db().await;

        let rows = get_competition_report(&test_db.pool, test_db.student_id("Petrov"))
            .await
            .unwrap();

        let summary: Vec<(&str, &str)> = rows
            .iter()
            .map(|r| (r.competition_name.as_str(), r.trainer_name.as_str()))
            .collect();
        assert_eq!(
            summary,
            vec![
                ("Winter Cup", "Andreev"),
                ("Winter Cup", "Ivanov"),
                ("Spring Cup", "Andreev"),
                ("Spring Cup", "Ivanov"),
            ]
        );

        assert_eq!(rows[0].competition_place, "Dome");
        assert_eq!(rows[0].student_name, "Petrov");
        assert_eq!(rows[0].team_name, "Falcons");
        assert_eq!(rows[0].competition_date.naive_utc(), at(2025, 1, 20, 12, 0));
        assert!(rows.windows(2).all(|w| w[0].competition_date <= w[1].competition_date));
    }

    #[rocket::async_test]
    async fn test_competition_report_empty_without_tournaments() {
        let test_db = create_standard_test_db().await;

        let smirnov = get_competition_report(&test_db.pool, test_db.student_id("Smirnov"))
            .await
            .unwrap();
        assert!(smirnov.is_empty());

        let orlov = get_competition_report(&test_db.pool, test_db.student_id("Orlov"))
            .await
            .unwrap();
        assert!(orlov.is_empty());
    }

    #[rocket::async_test]
    async fn test_schedule_report_splits_date_and_time() {
        let test_db = create_standard_test_db().await;

        let rows = get_training_schedule_report(&test_db.pool, test_db.student_id("Petrov"))
            .await
            .unwrap();

        assert_eq!(rows.len(), 2);

        assert_eq!(rows[0].trainer_name, "Andreev");
        assert_eq!(rows[0].room, "Hall 2");
        assert_eq!(
            rows[0].training_date,
            NaiveDate::from_ymd_opt(2025, 3, 3).unwrap()
        );
        assert_eq!(rows[0].start_time, NaiveTime::from_hms_opt(9, 30, 0).unwrap());

        assert_eq!(rows[1].trainer_name, "Ivanov");
        assert_eq!(rows[1].room, "Hall 1");
        assert_eq!(
            rows[1].training_date,
            NaiveDate::from_ymd_opt(2025, 3, 10).unwrap()
        );
    }

    #[rocket::async_test]
    async fn test_schedule_report_only_includes_linked_trainers() {
        let test_db = TestDbBuilder::new()
            .team("Falcons", "A")
            .team("Hawks", "B")
            .trainer("Ivanov", 45)
            .trainer("Guest", 50)
            .student("Petrov", 16, "Falcons")
            .team_trainer("Falcons", "Ivanov")
            .train("sprint", "Hall 1", at(2025, 3, 10, 18, 0), "Ivanov", "Falcons")
            .train("guest drill", "Hall 1", at(2025, 3, 11, 18, 0), "Guest", "Falcons")
            .train("away", "Hall 4", at(2025, 3, 12, 18, 0), "Ivanov", "Hawks")
            .build()
            .await
            .unwrap();

        let rows = get_training_schedule_report(&test_db.pool, test_db.student_id("Petrov"))
            .await
            .unwrap();

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].room, "Hall 1");
        assert_eq!(rows[0].trainer_name, "Ivanov");

        let empty = get_training_schedule_report(&test_db.pool, 9999).await.unwrap();
        assert!(empty.is_empty());
    }
}
