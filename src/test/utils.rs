pub mod test_db {
    use std::collections::HashMap;
    use std::str::FromStr;
    use std::sync::Once;
    use std::time::Duration;

    use chrono::NaiveDateTime;
    use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
    use sqlx::{Pool, Sqlite};

    use crate::auth::{Role, register_user};
    use crate::db::{
        create_absence, create_student, create_team, create_team_trainer, create_tournament,
        create_train, create_trainer,
    };
    use crate::error::AppError;

    static INIT: Once = Once::new();
    pub static STANDARD_PASSWORD: &str = "password123";

    #[derive(Default)]
    pub struct TestDbBuilder {
        teams: Vec<(String, String)>,
        trainers: Vec<(String, i64)>,
        students: Vec<TestStudent>,
        links: Vec<(String, String)>,
        trains: Vec<TestTrain>,
        tournaments: Vec<TestTournament>,
        absences: Vec<(String, String)>,
        users: Vec<TestUser>,
    }

    pub struct TestStudent {
        pub name: String,
        pub age: i64,
        pub team_name: String,
    }

    /// Sessions are keyed by `kind`, so keep kinds unique within one builder.
    pub struct TestTrain {
        pub kind: String,
        pub room: String,
        pub datetime: NaiveDateTime,
        pub trainer_name: String,
        pub team_name: String,
    }

    pub struct TestTournament {
        pub name: String,
        pub room: String,
        pub datetime: NaiveDateTime,
        pub team_name: String,
    }

    pub struct TestUser {
        pub username: String,
        pub password: String,
        pub role: Role,
    }

    impl TestDbBuilder {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn team(mut self, name: &str, league: &str) -> Self {
            self.teams.push((name.to_string(), league.to_string()));
            self
        }

        pub fn trainer(mut self, name: &str, age: i64) -> Self {
            self.trainers.push((name.to_string(), age));
            self
        }

        pub fn student(mut self, name: &str, age: i64, team_name: &str) -> Self {
            self.students.push(TestStudent {
                name: name.to_string(),
                age,
                team_name: team_name.to_string(),
            });
            self
        }

        pub fn team_trainer(mut self, team_name: &str, trainer_name: &str) -> Self {
            self.links
                .push((team_name.to_string(), trainer_name.to_string()));
            self
        }

        pub fn train(
            mut self,
            kind: &str,
            room: &str,
            datetime: NaiveDateTime,
            trainer_name: &str,
            team_name: &str,
        ) -> Self {
            self.trains.push(TestTrain {
                kind: kind.to_string(),
                room: room.to_string(),
                datetime,
                trainer_name: trainer_name.to_string(),
                team_name: team_name.to_string(),
            });
            self
        }

        pub fn tournament(
            mut self,
            name: &str,
            room: &str,
            datetime: NaiveDateTime,
            team_name: &str,
        ) -> Self {
            self.tournaments.push(TestTournament {
                name: name.to_string(),
                room: room.to_string(),
                datetime,
                team_name: team_name.to_string(),
            });
            self
        }

        pub fn absence(mut self, train_kind: &str, student_name: &str) -> Self {
            self.absences
                .push((train_kind.to_string(), student_name.to_string()));
            self
        }

        pub fn user(mut self, username: &str, role: Role) -> Self {
            self.users.push(TestUser {
                username: username.to_string(),
                password: STANDARD_PASSWORD.to_string(),
                role,
            });
            self
        }

        pub async fn build(self) -> Result<TestDb, AppError> {
            INIT.call_once(|| {
                let _ = tracing_subscriber::fmt()
                    .with_env_filter(tracing_subscriber::EnvFilter::new("debug"))
                    .with_test_writer()
                    .try_init();
            });

            // A single connection that never recycles, otherwise each new
            // connection would open its own empty in-memory database.
            let options = SqliteConnectOptions::from_str("sqlite::memory:")?.foreign_keys(true);
            let pool = SqlitePoolOptions::new()
                .max_connections(1)
                .idle_timeout(None::<Duration>)
                .max_lifetime(None::<Duration>)
                .connect_with(options)
                .await?;

            sqlx::migrate!("./migrations").run(&pool).await?;

            let mut db = TestDb {
                pool,
                team_ids: HashMap::new(),
                trainer_ids: HashMap::new(),
                student_ids: HashMap::new(),
                train_ids: HashMap::new(),
                tournament_ids: HashMap::new(),
                user_ids: HashMap::new(),
            };

            for (name, league) in &self.teams {
                let id = create_team(&db.pool, name, league).await?;
                db.team_ids.insert(name.clone(), id);
            }

            for (name, age) in &self.trainers {
                let id = create_trainer(&db.pool, name, *age).await?;
                db.trainer_ids.insert(name.clone(), id);
            }

            for student in &self.students {
                let team_id = lookup(&db.team_ids, "team", &student.team_name)?;
                let id = create_student(&db.pool, &student.name, student.age, 175, 70, team_id)
                    .await?;
                db.student_ids.insert(student.name.clone(), id);
            }

            for (team_name, trainer_name) in &self.links {
                let team_id = lookup(&db.team_ids, "team", team_name)?;
                let trainer_id = lookup(&db.trainer_ids, "trainer", trainer_name)?;
                create_team_trainer(&db.pool, team_id, trainer_id).await?;
            }

            for train in &self.trains {
                let trainer_id = lookup(&db.trainer_ids, "trainer", &train.trainer_name)?;
                let team_id = lookup(&db.team_ids, "team", &train.team_name)?;
                let id = create_train(
                    &db.pool,
                    &train.kind,
                    &train.room,
                    train.datetime,
                    trainer_id,
                    team_id,
                )
                .await?;
                db.train_ids.insert(train.kind.clone(), id);
            }

            for tournament in &self.tournaments {
                let team_id = lookup(&db.team_ids, "team", &tournament.team_name)?;
                let id = create_tournament(
                    &db.pool,
                    &tournament.name,
                    &tournament.room,
                    tournament.datetime,
                    team_id,
                )
                .await?;
                db.tournament_ids.insert(tournament.name.clone(), id);
            }

            for (train_kind, student_name) in &self.absences {
                let train_id = lookup(&db.train_ids, "train", train_kind)?;
                let student_id = lookup(&db.student_ids, "student", student_name)?;
                create_absence(&db.pool, train_id, student_id).await?;
            }

            for user in &self.users {
                let student_id = match user.role {
                    Role::Student => db.student_ids.get(&user.username).copied(),
                    Role::Trainer => None,
                };
                let trainer_id = match user.role {
                    Role::Trainer => db.trainer_ids.get(&user.username).copied(),
                    Role::Student => None,
                };

                let created = register_user(
                    &db.pool,
                    &user.username,
                    &user.password,
                    user.role,
                    student_id,
                    trainer_id,
                )
                .await?;
                db.user_ids.insert(user.username.clone(), created.id);
            }

            Ok(db)
        }
    }

    fn lookup(ids: &HashMap<String, i64>, kind: &str, name: &str) -> Result<i64, AppError> {
        ids.get(name)
            .copied()
            .ok_or_else(|| AppError::Internal(format!("Test fixture references unknown {} {}", kind, name)))
    }

    pub struct TestDb {
        pub pool: Pool<Sqlite>,
        pub team_ids: HashMap<String, i64>,
        pub trainer_ids: HashMap<String, i64>,
        pub student_ids: HashMap<String, i64>,
        pub train_ids: HashMap<String, i64>,
        pub tournament_ids: HashMap<String, i64>,
        pub user_ids: HashMap<String, i64>,
    }

    impl TestDb {
        pub fn team_id(&self, name: &str) -> i64 {
            self.team_ids[name]
        }

        pub fn trainer_id(&self, name: &str) -> i64 {
            self.trainer_ids[name]
        }

        pub fn student_id(&self, name: &str) -> i64 {
            self.student_ids[name]
        }

        pub fn train_id(&self, kind: &str) -> i64 {
            self.train_ids[kind]
        }

        pub fn tournament_id(&self, name: &str) -> i64 {
            self.tournament_ids[name]
        }

        pub async fn count_rows(&self, table: &str) -> i64 {
            sqlx::query_scalar::<_, i64>(&format!("SELECT COUNT(*) FROM {}", table))
                .fetch_one(&self.pool)
                .await
                .unwrap()
        }
    }
}

pub mod test_utils {
    use chrono::{Duration, NaiveDate, NaiveDateTime, Utc};
    use rocket::local::asynchronous::Client;

    pub use super::test_db::{STANDARD_PASSWORD, TestDb, TestDbBuilder};
    use crate::init_rocket;

    pub fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(year, month, day)
            .unwrap()
            .and_hms_opt(hour, minute, 0)
            .unwrap()
    }

    pub fn days_ago(days: i64) -> NaiveDateTime {
        Utc::now().naive_utc() - Duration::days(days)
    }

    pub fn days_ahead(days: i64) -> NaiveDateTime {
        Utc::now().naive_utc() + Duration::days(days)
    }

    /// Falcons with trainers Ivanov and Andreev, Hawks with Sidorova.
    /// Petrov plays for Falcons, Smirnov for Hawks, Orlov has no trainer.
    pub async fn create_standard_test_db() -> TestDb {
        TestDbBuilder::new()
            .team("Falcons", "A")
            .team("Hawks", "B")
            .team("Loners", "C")
            .trainer("Ivanov", 45)
            .trainer("Andreev", 38)
            .trainer("Sidorova", 33)
            .student("Petrov", 16, "Falcons")
            .student("Smirnov", 17, "Hawks")
            .student("Orlov", 15, "Loners")
            .team_trainer("Falcons", "Ivanov")
            .team_trainer("Falcons", "Andreev")
            .team_trainer("Hawks", "Sidorova")
            .train("sprint", "Hall 1", at(2025, 3, 10, 18, 0), "Ivanov", "Falcons")
            .train("stretching", "Hall 2", at(2025, 3, 3, 9, 30), "Andreev", "Falcons")
            .train("passing", "Field", at(2025, 3, 5, 17, 0), "Sidorova", "Hawks")
            .tournament("Spring Cup", "Arena", at(2025, 4, 12, 11, 0), "Falcons")
            .tournament("Winter Cup", "Dome", at(2025, 1, 20, 12, 0), "Falcons")
            .build()
            .await
            .expect("Failed to build standard test database")
    }

    pub async fn setup_test_client(test_db: TestDb) -> (Client, TestDb) {
        let client = Client::tracked(init_rocket(test_db.pool.clone()))
            .await
            .expect("valid rocket instance");

        (client, test_db)
    }
}
