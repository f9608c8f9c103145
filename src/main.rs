use tracing_subscriber::fmt::time::OffsetTime;
use vector2::core::prelude::*;
use vector2::{check, check_almost_eq, check_eq, check_false, check_ge};

fn setup_log() {
    let timer = OffsetTime::new(
        time::UtcOffset::UTC,
        time::macros::format_description!("[hour]:[minute]:[second].[subsecond digits:6]"),
    );
    tracing_subscriber::fmt()
        .event_format(
            tracing_subscriber::fmt::format()
                .with_target(false)
                .with_source_location(true)
                .with_timer(timer),
        )
        .init();
}

fn main() -> Result<()> {
    setup_log();
    run_checks();

    let corners = [
        Vector2::right(),
        Vector2::up(),
        Vector2::left(),
        Vector2::down(),
    ];
    info!("unit directions: {}", corners.iter().join(", "));

    let mut walker = Vector2::zero();
    for step in corners.iter().cycle().take(6) {
        walker.add(*step).times(2.0);
    }
    let components: &[f64] = &[3.0, 4.0];
    let start = Vector2::try_from(components).context("parsing start point")?;
    info!(
        "walker ended at {walker:.3}, {:.3} away from {start}",
        linalg::distance(walker, start)
    );

    let normed = Vector2::zero().normalized();
    if !normed.is_finite() {
        warn!("normalizing {} gave {normed}", Vector2::zero());
    }
    Ok(())
}

fn run_checks() {
    let v = Vector2::new(3.0, 4.0);
    check_eq!(v.magnitude(), 5.0);
    check_eq!(v.inverse().inverse(), v);
    check_almost_eq!(v.normalized(), Vector2::new(0.6, 0.8));

    check_eq!(linalg::dot(Vector2::new(1.0, 0.0), Vector2::new(0.0, 1.0)), 0.0);
    check!(linalg::is_vertical(Vector2::new(1.0, 0.0), Vector2::new(0.0, 1.0)));
    check_eq!(linalg::cross(Vector2::new(2.0, 0.0), Vector2::new(4.0, 0.0)), 0.0);
    check!(linalg::is_parallel(Vector2::new(2.0, 0.0), Vector2::new(4.0, 0.0)));
    check_false!(linalg::is_parallel(Vector2::right(), Vector2::up()));

    let (a, b) = (Vector2::new(5.0, 5.0), Vector2::new(2.0, 1.0));
    check_eq!(linalg::sub(a, b), Vector2::new(3.0, 4.0));
    check_eq!(linalg::distance(a, b), 5.0);
    check_eq!(linalg::distance(a, b), linalg::distance(b, a));
    check_ge!(linalg::distance(a, b), 0.0);

    let mut right = Vector2::right();
    right.times(10.0);
    check_eq!(Vector2::right(), Vector2::new(1.0, 0.0));
    info!("all checks passed");
}
