use free_fall_simulation::*;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let environment = Environment::new(GRAVITY, TIME_STEP)?;
    let aerodynamics = Aerodynamics::new(BODY_DRAG_COEFFICIENT, BODY_CROSS_SECTIONAL_AREA)?;
    let body = FallingBody::new(&environment, INITIAL_HEIGHT, BODY_MASS, aerodynamics)?;

    let mut telemetry = Telemetry::new();

    for sample in Trajectory::new(body).with_tick_limit(MAX_SIMULATION_TICKS) {
        match sample {
            Ok(sample) => {
                println!("{}", Telemetry::format_log_line(&sample));
                telemetry.collect_data(&sample);
            }
            Err(e) => {
                println!("Error during simulation step: {}", e);
                break;
            }
        }
    }

    telemetry.display_summary();

    let mut renderer = TextRenderer::new(std::io::stdout().lock());
    telemetry.render_all(&mut renderer)?;

    Ok(())
}
