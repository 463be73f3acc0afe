use pixelgrid::{apply, FilterParams, OpKind, PixelGrid};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn main() {
    // Demo stub: builds a synthetic ramp image and runs one operation on it
    let w = 64usize;
    let h = 48usize;
    let mut img = match PixelGrid::from_rows(
        (0..h)
            .map(|_| (0..w).map(|x| (x * 255 / (w - 1)) as u8).collect())
            .collect(),
    ) {
        Ok(img) => img,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    let mut rng = StdRng::seed_from_u64(0);
    match apply(
        OpKind::Contour,
        &mut img,
        None,
        &FilterParams::default(),
        &mut rng,
    ) {
        Ok(report) => println!(
            "op={} size={}x{} elapsed_ms={:.3}",
            report.op, report.width, report.height, report.elapsed_ms
        ),
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}
