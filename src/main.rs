use std::path::PathBuf;
use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use gymadmin::controllers::{
    AttendanceController, AuthController, DashboardController, DietPlansController,
    MembershipsController, PaymentsController, ProfileController, UsersController,
    WorkoutPlansController,
};
use gymadmin::filters::{Choice, DateRange};
use gymadmin::models::{
    DietGoal, DietPlanDraft, Difficulty, Exercise, FoodDraft, MealDraft, MembershipStatus,
    NewMembership, NewWorkoutPlan, PaymentStatus, PlanType, ProfileUpdate, UserUpdate,
};
use gymadmin::navigation::{self, LogNavigator};
use gymadmin::notify::ConsoleNotifier;
use gymadmin::{ApiClient, Config, SessionStore};

mod view;

#[derive(Parser, Debug)]
#[command(name = "gymadmin", version = env!("GIT_VERSION"), about = "Gym management admin console")]
struct Cli {
    /// Backend base URL, e.g. http://localhost:5000/api
    #[arg(long, env = "API_BASE_URL")]
    api_url: Option<String>,

    /// Where the session token is kept
    #[arg(long, env = "SESSION_FILE")]
    session_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Sign in and store the session token
    Login {
        #[arg(long)]
        email: String,
        #[arg(long, env = "GYMADMIN_PASSWORD")]
        password: String,
    },
    /// Drop the local session token
    Logout,
    Dashboard,
    Users {
        #[arg(long, default_value = "")]
        search: String,
    },
    UpdateUser {
        id: String,
        #[arg(long)]
        goal: String,
        #[arg(long)]
        weight: f64,
        #[arg(long)]
        height: f64,
        #[arg(long)]
        age: u32,
    },
    WorkoutPlans {
        /// beginner, intermediate, advanced or all
        #[arg(long, default_value = "all")]
        difficulty: String,
    },
    CreateWorkoutPlan {
        #[arg(long)]
        name: String,
        #[arg(long)]
        description: Option<String>,
        #[arg(long, default_value = "beginner")]
        difficulty: String,
        /// NAME:SETS:REPS[:REST_SECS], repeatable
        #[arg(long = "exercise", required = true)]
        exercises: Vec<String>,
    },
    DietPlans,
    CreateDietPlan {
        #[arg(long)]
        title: String,
        #[arg(long)]
        description: Option<String>,
        /// weight_loss, muscle_gain or maintenance
        #[arg(long, default_value = "maintenance")]
        goal: String,
        /// Daily calorie target
        #[arg(long)]
        calories: u32,
        /// NAME@TIME=FOOD,FOOD with FOOD as NAME:KCAL[:PROTEIN:CARBS:FATS], repeatable
        #[arg(long = "meal", required = true)]
        meals: Vec<String>,
    },
    Memberships {
        #[arg(long, default_value = "")]
        search: String,
        /// active, expired, cancelled or all
        #[arg(long, default_value = "all")]
        status: String,
    },
    CreateMembership {
        #[arg(long)]
        user_id: String,
        /// monthly or yearly
        #[arg(long, default_value = "monthly")]
        plan: String,
        /// Defaults to today
        #[arg(long)]
        start: Option<NaiveDate>,
        /// Defaults to 30 days after the start
        #[arg(long)]
        end: Option<NaiveDate>,
    },
    DeleteMembership {
        id: String,
    },
    Attendance {
        #[arg(long, default_value = "")]
        search: String,
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    CheckIn {
        user_id: String,
    },
    Payments {
        #[arg(long, default_value = "")]
        search: String,
        /// completed, pending, failed, refunded or all
        #[arg(long, default_value = "all")]
        status: String,
        /// monthly, yearly or all
        #[arg(long, default_value = "all")]
        plan: String,
        #[arg(long)]
        from: Option<NaiveDate>,
        #[arg(long)]
        to: Option<NaiveDate>,
        /// Write the filtered rows as CSV to this file
        #[arg(long)]
        csv: Option<PathBuf>,
    },
    Profile,
    UpdateProfile {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        phone: Option<String>,
        #[arg(long)]
        location: Option<String>,
    },
    ChangePassword {
        #[arg(long)]
        current: String,
        #[arg(long)]
        new: String,
        #[arg(long)]
        confirm: String,
    },
    /// End every session of this admin account
    LogoutAll,
}

impl Command {
    /// Page this command belongs to, for the login guard.
    fn route(&self) -> &'static str {
        match self {
            Command::Login { .. } | Command::Logout => navigation::LOGIN,
            Command::Dashboard => navigation::DASHBOARD,
            Command::Users { .. } | Command::UpdateUser { .. } => "/users",
            Command::WorkoutPlans { .. } | Command::CreateWorkoutPlan { .. } => "/workout-plans",
            Command::DietPlans | Command::CreateDietPlan { .. } => "/diet-plans",
            Command::Memberships { .. }
            | Command::CreateMembership { .. }
            | Command::DeleteMembership { .. } => "/memberships",
            Command::Attendance { .. } | Command::CheckIn { .. } => "/attendance",
            Command::Payments { .. } => "/payments",
            Command::Profile
            | Command::UpdateProfile { .. }
            | Command::ChangePassword { .. }
            | Command::LogoutAll => "/profile",
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "gymadmin=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config = Config::from_env()?;
    if let Some(url) = cli.api_url {
        config.api_base_url = url;
    }
    if let Some(path) = cli.session_file {
        config.session_file = path;
    }

    tracing::debug!("Using backend {}", config.api_base_url);

    let session = SessionStore::open(&config.session_file)?;
    let client = ApiClient::new(
        config,
        session.clone(),
        Arc::new(ConsoleNotifier),
        Arc::new(LogNavigator),
    )?;

    let route = cli.command.route();
    if navigation::resolve_route(route, &session) != route {
        anyhow::bail!("Not logged in. Run `gymadmin login --email <email>` first.");
    }

    run(cli.command, &client).await
}

async fn run(command: Command, client: &ApiClient) -> anyhow::Result<()> {
    let now = Utc::now();
    let today = now.date_naive();

    match command {
        Command::Login { email, password } => {
            AuthController::new(client).login(&email, &password).await?;
        }
        Command::Logout => {
            AuthController::new(client).logout()?;
        }
        Command::Dashboard => {
            let mut page = DashboardController::new(client);
            page.load(today).await;
            view::dashboard(&page);
        }
        Command::Users { search } => {
            let mut page = UsersController::new(client);
            page.search = search;
            page.load().await;
            view::users(&page.visible(), page.state.source);
        }
        Command::UpdateUser {
            id,
            goal,
            weight,
            height,
            age,
        } => {
            let mut page = UsersController::new(client);
            page.load().await;
            let update = UserUpdate {
                goal,
                weight,
                height,
                age,
            };
            page.update(&id, update).await?;
        }
        Command::WorkoutPlans { difficulty } => {
            let mut page = WorkoutPlansController::new(client);
            page.difficulty = parse_choice(&difficulty, Difficulty::parse, "difficulty")?;
            page.load().await;
            view::workout_plans(&page.visible(), page.state.source);
        }
        Command::CreateWorkoutPlan {
            name,
            description,
            difficulty,
            exercises,
        } => {
            let difficulty = Difficulty::parse(&difficulty)
                .ok_or_else(|| anyhow::anyhow!("Unknown difficulty: {}", difficulty))?;
            let exercises = exercises
                .iter()
                .map(|raw| parse_exercise(raw))
                .collect::<anyhow::Result<Vec<_>>>()?;
            let mut page = WorkoutPlansController::new(client);
            page.load().await;
            let plan = NewWorkoutPlan {
                name,
                description,
                difficulty,
                exercises,
            };
            page.create(plan).await?;
        }
        Command::DietPlans => {
            let mut page = DietPlansController::new(client);
            page.load().await;
            view::diet_plans(&page.state.records, page.state.source);
        }
        Command::CreateDietPlan {
            title,
            description,
            goal,
            calories,
            meals,
        } => {
            let goal =
                DietGoal::parse(&goal).ok_or_else(|| anyhow::anyhow!("Unknown goal: {}", goal))?;
            let meals = meals
                .iter()
                .map(|raw| parse_meal(raw))
                .collect::<anyhow::Result<Vec<_>>>()?;
            let draft = DietPlanDraft {
                title,
                description,
                goal,
                daily_calories: calories,
                meals,
            };
            view::diet_draft(&draft);
            let mut page = DietPlansController::new(client);
            page.load().await;
            page.create(&draft).await?;
        }
        Command::Memberships { search, status } => {
            let mut page = MembershipsController::new(client);
            page.search = search;
            page.status = parse_choice(&status, MembershipStatus::parse, "status")?;
            page.load().await;
            view::memberships(&page.visible(), page.summary(now), page.state.source, now);
        }
        Command::CreateMembership {
            user_id,
            plan,
            start,
            end,
        } => {
            let plan = PlanType::parse(&plan)
                .ok_or_else(|| anyhow::anyhow!("Unknown plan type: {}", plan))?;
            let mut new = NewMembership::starting(&user_id, plan, start.unwrap_or(today));
            if let Some(end) = end {
                new.end_date = end;
            }
            let mut page = MembershipsController::new(client);
            page.load().await;
            page.create(new).await?;
        }
        Command::DeleteMembership { id } => {
            let mut page = MembershipsController::new(client);
            page.load().await;
            page.delete(&id).await?;
        }
        Command::Attendance { search, date } => {
            let mut page = AttendanceController::new(client);
            page.search = search;
            page.date = date;
            page.load(now).await;
            view::attendance(&page.visible(), page.stats(today));
        }
        Command::CheckIn { user_id } => {
            let mut page = AttendanceController::new(client);
            page.load(now).await;
            page.check_in(&user_id, now).await?;
            let counts = page.user_check_ins(&user_id, today);
            println!(
                "{} check-ins this week, {} this month, {} total",
                counts.this_week, counts.this_month, counts.total
            );
        }
        Command::Payments {
            search,
            status,
            plan,
            from,
            to,
            csv,
        } => {
            let mut page = PaymentsController::new(client);
            page.search = search;
            page.status = parse_choice(&status, PaymentStatus::parse, "status")?;
            page.plan = parse_choice(&plan, PlanType::parse, "plan")?;
            page.range = DateRange::new(from, to);
            page.load().await;

            if let Some(path) = csv {
                std::fs::write(&path, page.export_csv())?;
                tracing::info!("Wrote {}", path.display());
            } else {
                view::payments(
                    &page.visible(),
                    &page.stats(today),
                    &page.revenue_series(today),
                    page.state.source,
                );
            }
        }
        Command::Profile => {
            let mut page = ProfileController::new(client);
            page.load(now).await;
            view::profile(page.profile.as_ref(), page.source);
        }
        Command::UpdateProfile {
            name,
            email,
            phone,
            location,
        } => {
            let mut page = ProfileController::new(client);
            page.load(now).await;
            let update = ProfileUpdate {
                name,
                email,
                phone,
                location,
            };
            page.update(update, now).await?;
        }
        Command::ChangePassword {
            current,
            new,
            confirm,
        } => {
            ProfileController::new(client)
                .change_password(&current, &new, &confirm)
                .await?;
        }
        Command::LogoutAll => {
            ProfileController::new(client).logout_all().await?;
        }
    }

    Ok(())
}

fn parse_choice<T: PartialEq>(
    raw: &str,
    parse: impl Fn(&str) -> Option<T>,
    what: &str,
) -> anyhow::Result<Choice<T>> {
    Choice::parse_with(raw, parse).ok_or_else(|| anyhow::anyhow!("Unknown {}: {}", what, raw))
}

/// `Squat:5:5:120` -> 5 sets of 5 reps, 120s rest. Rest defaults to 60s.
fn parse_exercise(raw: &str) -> anyhow::Result<Exercise> {
    let parts: Vec<&str> = raw.split(':').map(str::trim).collect();
    let (name, sets, reps, rest) = match parts.as_slice() {
        [name, sets, reps] => (*name, *sets, *reps, "60"),
        [name, sets, reps, rest] => (*name, *sets, *reps, *rest),
        _ => anyhow::bail!("Expected NAME:SETS:REPS[:REST_SECS], got {}", raw),
    };
    Ok(Exercise {
        name: name.to_string(),
        sets: sets.parse()?,
        reps: reps.parse()?,
        rest_time: rest.parse()?,
    })
}

/// `Breakfast@08:00=Oats:350:12:60:6,Eggs:210` -> one meal with two foods.
/// Macros are optional per food and default to zero.
fn parse_meal(raw: &str) -> anyhow::Result<MealDraft> {
    let (head, foods) = raw
        .split_once('=')
        .ok_or_else(|| anyhow::anyhow!("Expected NAME@TIME=FOODS, got {}", raw))?;
    let (name, time) = head
        .split_once('@')
        .ok_or_else(|| anyhow::anyhow!("Meal needs a time, got {}", head))?;

    let foods = foods
        .split(',')
        .map(|food| {
            let parts: Vec<&str> = food.split(':').map(str::trim).collect();
            let (name, calories, macros) = match parts.as_slice() {
                [name, calories] => (*name, *calories, ["0", "0", "0"]),
                [name, calories, protein, carbs, fats] => {
                    (*name, *calories, [*protein, *carbs, *fats])
                }
                _ => anyhow::bail!("Expected NAME:KCAL[:PROTEIN:CARBS:FATS], got {}", food),
            };
            Ok(FoodDraft {
                name: name.to_string(),
                calories: calories.parse()?,
                protein: macros[0].parse()?,
                carbs: macros[1].parse()?,
                fats: macros[2].parse()?,
            })
        })
        .collect::<anyhow::Result<Vec<_>>>()?;

    Ok(MealDraft {
        name: name.trim().to_string(),
        time: time.trim().to_string(),
        foods,
    })
}
