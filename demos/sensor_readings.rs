use approximate_rs::{ApproximateNumber, Comparison, Function, overlap};

/// Combining sensor readings and acting on them only when the error bounds
/// allow it
fn main() {
    #[cfg(feature = "logging")]
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    println!("🌡️  Sensor Readings with Error Bounds");
    println!("====================================\n");

    let readings = ["21.4 ± 0.3", "22.1 ± 0.3", "21.9±0.5", "80±", "21.7"];
    let mut valid = Vec::new();
    for text in readings {
        match ApproximateNumber::parse(text) {
            Ok(reading) => {
                println!("  {text:>12} -> {reading}");
                valid.push(reading);
            }
            Err(err) => println!("  {text:>12} -> rejected: {err}"),
        }
    }

    #[allow(clippy::cast_precision_loss)]
    let mean = valid.iter().sum::<ApproximateNumber>() / valid.len() as f64;
    println!("\n📊 Mean of {} readings: {mean:.2} °C", valid.len());

    println!("\n🔍 Pairwise agreement:");
    for (i, a) in valid.iter().enumerate() {
        for b in &valid[i + 1..] {
            let verdict = if overlap(*a, *b) {
                "consistent"
            } else if a.less_than(*b) {
                "first is colder"
            } else {
                "first is warmer"
            };
            println!("  {a} vs {b}: {verdict}");
        }
    }

    println!("\n🚨 Alarm thresholds:");
    let limit = 22.0;
    for reading in &valid {
        let state = if reading.greater_or_equal(limit) {
            "ALARM"
        } else if reading.overlaps(limit) {
            "watch"
        } else {
            "ok"
        };
        println!("  {reading}: {state}");
    }

    println!("\n🧮 Derived quantities:");
    let kelvin = mean + 273.15;
    println!("  absolute temperature: {kelvin:.2} K");

    // Saturation vapour pressure (Magnus formula), hPa
    let magnus = |t: f64| 6.1094 * (17.625 * t / (t + 243.04)).exp();
    let pressure = mean.apply_function(Function::Generic(&magnus), 1e-3);
    println!("  saturation vapour pressure: {pressure:.3} hPa");

    let log_ratio = (kelvin / ApproximateNumber::exact(273.15)).ln();
    println!("  ln(T / T0): {log_ratio:.5}");
}
