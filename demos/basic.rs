use num_complex::Complex;
use polylog::*;

fn main() {
    let pi = std::f64::consts::PI;
    let ln2 = std::f64::consts::LN_2;

    // -- Li_2(1/2) three ways --
    println!("=== Li_2(1/2) ===");
    println!("closed form      = {}", pi * pi / 12.0 - ln2 * ln2 / 2.0);
    let rec = polylog_rec(2, Complex::new(0.5_f64, 0.0)).unwrap();
    println!("polylog_rec      = {rec}");
    let series: f64 = (1..=1000).map(|k: i32| 0.5_f64.powi(k) / f64::from(k * k)).sum();
    println!("Σ 2^-k / k²      = {series}");

    // -- Complex arguments --
    println!("\n=== Complex arguments ===");
    for z in [
        Complex::new(0.3_f64, 0.2),
        Complex::new(0.6, 0.8),
        Complex::new(-3.0, 1.0),
        Complex::new(2.0, 0.0),
    ] {
        let r = polylog_raw(2, z, &Options::default()).unwrap();
        println!("Li_2({z}) = {}  [{:?}, {} terms]", r.value, r.region, r.terms);
    }

    // -- Real axis --
    println!("\n=== Real axis ===");
    for n in [3, 1, 0, -2] {
        let x = -0.7_f64;
        println!("Li_{n}({x}) = {}", polylog_real(n, x).unwrap());
    }
    match polylog_real(2, 1.5_f64) {
        Ok(v) => println!("Li_2(1.5) = {v}"),
        Err(e) => println!("Li_2(1.5): {e}"),
    }

    // -- Doubling for large |z| --
    println!("\n=== Doubling ===");
    let z = Complex::new(30.0_f64, -40.0);
    let a = polylog(3, z).unwrap();
    let b = polylog_rec(3, z).unwrap();
    println!("inversion: Li_3({z}) = {a}");
    println!("doubling:  Li_3({z}) = {b}");

    // -- Building blocks --
    println!("\n=== Building blocks ===");
    println!("zeta(3)  = {}", zeta::<f64>(3));
    println!("B_12     = {}", bernoulli_number::<f64>(12));
    println!("H_10     = {}", harmonic_number::<f64>(10));

    // -- f32 support --
    println!("\n=== f32 support ===");
    let w = polylog(2, Complex::new(0.25_f32, 0.5)).unwrap();
    println!("Li_2(0.25+0.5i) = {w} (f32)");
}
