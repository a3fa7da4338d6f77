use wallclock_time::Time;

fn main() -> anyhow::Result<()> {
    wallclock_observability::init();

    let afternoon = Time::new(15, 50)?;
    tracing::info!(time = %afternoon, "constructed time");
    println!("{afternoon}");

    // Hour 25 is out of range; the error propagates out of main.
    let invalid = Time::new(25, 50).inspect_err(|e| {
        tracing::error!(error = %e, "rejected time");
    })?;
    println!("{invalid}");

    Ok(())
}
