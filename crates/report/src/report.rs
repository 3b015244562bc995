use std::io::Write;

use anyhow::Context;
use log::{debug, info};
use stride_domain::read_package;

/// Sensor packages processed by the demonstration report.
pub const PACKAGES: [(&str, &[f64]); 3] = [
    ("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]),
    ("RUN", &[15000.0, 1.0, 75.0]),
    ("WLK", &[9000.0, 1.0, 75.0, 180.0]),
];

/// Write one summary line per package, in the order of `packages`.
pub fn write_report(out: &mut impl Write, packages: &[(&str, &[f64])]) -> anyhow::Result<()> {
    for (index, (type_code, values)) in packages.iter().enumerate() {
        let workout = read_package(type_code, values)
            .with_context(|| format!("failed to read package {} ({type_code})", index + 1))?;
        debug!("{:?}", workout.metrics());
        writeln!(out, "{}", workout.show_training_info())
            .context("failed to write summary")?;
    }

    info!("processed {} packages", packages.len());

    Ok(())
}
