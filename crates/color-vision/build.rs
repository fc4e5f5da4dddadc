use std::env;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// WCAG 2.x channel linearization (threshold 0.03928, exponent 2.4)
fn srgb_to_linear_wcag(srgb: f64) -> f64 {
    if srgb <= 0.03928 {
        srgb / 12.92
    } else {
        ((srgb + 0.055) / 1.055).powf(2.4)
    }
}

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();
    let dest_path = Path::new(&out_dir).join("linear_lut.rs");
    let mut file = File::create(&dest_path).unwrap();

    // One entry per 8-bit channel value
    writeln!(file, "/// Lookup table for 8-bit sRGB to linear conversion").unwrap();
    writeln!(file, "/// Index: channel value 0..=255, Value: linear value").unwrap();
    writeln!(file, "pub static SRGB8_TO_LINEAR: [f64; 256] = [").unwrap();
    for i in 0..256 {
        let linear = srgb_to_linear_wcag(i as f64 / 255.0);
        if i > 0 && i % 4 == 0 {
            writeln!(file).unwrap();
        }
        write!(file, "    {:e},", linear).unwrap();
    }
    writeln!(file, "\n];").unwrap();

    println!("cargo::rerun-if-changed=build.rs");
}
