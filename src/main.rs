use goose::prelude::*;
use hotel_loadtest::prelude::*;

/// Regular and admin users against the hotel reservation API. Every option is a
/// goose run-time option, e.g. `--host`, `--users`, `--hatch-rate`, `--run-time`.
#[tokio::main]
async fn main() -> Result<(), GooseError> {
    HotelLoadTest::new(RunHooks::standard())
        .register(GooseAttack::initialize()?)?
        .set_default(GooseDefault::Host, DEFAULT_HOST)?
        .execute()
        .await?;

    Ok(())
}
