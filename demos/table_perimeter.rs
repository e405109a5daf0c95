use approximate_rs::{ApproximateNumber, Comparison};

/// Measuring a kitchen table with a tape measure
///
/// The tape is divided in centimetres, so every reading is good to half a
/// division. This walks through what happens to that half centimetre as the
/// readings are combined.
fn main() -> Result<(), approximate_rs::ApproxError> {
    #[cfg(feature = "logging")]
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    println!("📏 Measuring a Table");
    println!("====================\n");

    let width: ApproximateNumber = "50±0.5".parse()?;
    let length: ApproximateNumber = "100±0.5".parse()?;
    println!("width  = ({width}) cm");
    println!("length = ({length}) cm");

    let perimeter = (width + length) * 2.0;
    println!("\nperimeter = 2 * (width + length) = ({perimeter}) cm");
    println!("  could be anywhere in [{}, {}] cm", perimeter.min(), perimeter.max());

    let difference = length - width;
    println!("\nlength - width = ({difference}) cm");
    println!("  the values subtracted, the errors still added up");

    let area = width * length;
    println!("\narea = width * length = ({area:.1}) cm²");
    println!("  relative error {:.2} %", area.relative_delta() * 100.0);

    let diagonal = (width * width + length * length).sqrt();
    println!("\ndiagonal = ({diagonal:.3}) cm");

    // A doorway measured with the same tape
    let doorway = ApproximateNumber::from_min_max(79.5, 80.5)?;
    println!("\n🚪 Will it fit through a ({doorway}) cm doorway on its side?");
    if width.less_than(doorway) {
        println!("  yes, the width fits for sure");
    } else if width.overlaps(doorway) {
        println!("  maybe: the readings overlap, measure again");
    } else {
        println!("  no");
    }

    Ok(())
}
