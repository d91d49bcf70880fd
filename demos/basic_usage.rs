// ============================================================================
// Basic Usage Example
// ============================================================================

use decimal_vectors::prelude::*;

fn main() -> Result<(), VectorError> {
    #[cfg(feature = "logging")]
    let _ = decimal_vectors::logging::init();

    println!("=== Decimal Vectors Example ===\n");

    let a = Vector::new([8.218, -9.341])?;
    let b = Vector::new([-1.129, 2.111])?;
    println!("a = {}", a);
    println!("b = {}", b);
    println!("a + b = {}", a.plus(&b)?);
    println!("a - b = {}", a.minus(&b)?);
    println!("7.41 * a = {}\n", a.times_scalar(7.41)?);

    println!("|a| = {}", a.magnitude()?);
    println!("unit(a) = {}", a.normalize()?);
    println!("a . b = {}", a.dot_product(&b)?);
    println!("angle(a, b) = {:.3} degrees\n", a.angle(&b, AngleUnit::Degrees)?);

    println!("a parallel to b: {}", a.is_parallel(&b)?);
    println!("a orthogonal to b: {}", a.is_orthogonal(&b)?);
    println!("a parallel to -3a: {}\n", a.is_parallel(&a.times_scalar(-3)?)?);

    println!("proj_b(a) = {}", a.component_parallel(&b)?);
    println!("perp_b(a) = {}\n", a.component_orthogonal(&b)?);

    let u = Vector::new([8.462, 7.893, -8.187])?;
    let w = Vector::new([6.984, -5.975, 4.778])?;
    println!("u x w = {}", u.cross_product(&w)?);
    println!("a x b (embedded in R3) = {}", a.cross_product(&b)?);
    println!("parallelogram(u, w) = {}", u.area_of_parallelogram(&w)?);
    println!("triangle(u, w) = {}\n", u.area_of_triangle(&w)?);

    // Errors are typed, never silently truncated
    match a.plus(&u) {
        Err(err) => println!("a + u fails: {}", err),
        Ok(sum) => println!("unexpected sum: {}", sum),
    }
    match Vector::<7>::zero(2)?.normalize() {
        Err(err) => println!("normalize(0) fails: {}", err),
        Ok(unit) => println!("unexpected unit vector: {}", unit),
    }

    println!("\n=== Example Complete ===");
    Ok(())
}
