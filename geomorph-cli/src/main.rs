use argh::FromArgs;
use std::path::PathBuf;

use geomorph::apps::{
    GeodesicFilterConfig, GeodesicFiltersApp, MorphologicalOperation, StructuringElement,
};
use geomorph::image::{Image, ImageSize, MultiBandImage};

#[derive(FromArgs)]
/// Apply geodesic morphological filtering (opening- or closing-by-reconstruction)
/// to one channel of an image
struct Args {
    /// path to the input image
    #[argh(option, short = 'i')]
    input: PathBuf,

    /// path to the output image
    #[argh(option, short = 'o')]
    output: PathBuf,

    /// the selected channel index, 1-based (default: 1)
    #[argh(option, short = 'c', default = "1")]
    channel: usize,

    /// structuring element type: ball, cross (default: ball)
    #[argh(option, default = "String::from(\"ball\")")]
    structype: String,

    /// structuring element x radius (default: 5)
    #[argh(option, default = "5")]
    xradius: usize,

    /// structuring element y radius (default: 5)
    #[argh(option, default = "5")]
    yradius: usize,

    /// morphological operation: gopening, gclosing
    #[argh(option, short = 'f')]
    filter: String,
}

/// Decode the input into a band-interleaved f32 raster.
fn read_raster(path: &PathBuf) -> Result<MultiBandImage<f32>, Box<dyn std::error::Error>> {
    let decoded = image::open(path)?;

    let raster = if decoded.color().channel_count() <= 2 {
        let luma = decoded.to_luma32f();
        let size = ImageSize {
            width: luma.width() as usize,
            height: luma.height() as usize,
        };
        MultiBandImage::new(size, 1, luma.into_raw())?
    } else {
        let rgb = decoded.to_rgb32f();
        let size = ImageSize {
            width: rgb.width() as usize,
            height: rgb.height() as usize,
        };
        MultiBandImage::new(size, 3, rgb.into_raw())?
    };

    Ok(raster)
}

/// Rescale the filtered band to 8 bits and write it out.
fn write_band(path: &PathBuf, band: &Image<f32, 1>) -> Result<(), Box<dyn std::error::Error>> {
    let (mut lo, mut hi) = (f32::INFINITY, f32::NEG_INFINITY);
    for &v in band.as_slice() {
        lo = lo.min(v);
        hi = hi.max(v);
    }
    let scale = if hi > lo { 255.0 / (hi - lo) } else { 0.0 };
    log::info!("output range [{lo}, {hi}], rescaling to 8 bits");

    let data = band
        .as_slice()
        .iter()
        .map(|&v| ((v - lo) * scale).round() as u8)
        .collect();

    let out = image::GrayImage::from_raw(band.width() as u32, band.height() as u32, data)
        .ok_or("failed to assemble the output buffer")?;
    out.save(path)?;

    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args: Args = argh::from_env();

    let structuring_element = match args.structype.as_str() {
        "ball" => StructuringElement::Ball {
            x_radius: args.xradius,
            y_radius: args.yradius,
        },
        "cross" => StructuringElement::Cross {
            x_radius: args.xradius,
            y_radius: args.yradius,
        },
        other => return Err(format!("unknown structuring element type: {other}").into()),
    };

    let operation = match args.filter.as_str() {
        "gopening" => MorphologicalOperation::GeodesicOpening,
        "gclosing" => MorphologicalOperation::GeodesicClosing,
        other => return Err(format!("unknown morphological operation: {other}").into()),
    };

    let raster = read_raster(&args.input)?;
    log::info!(
        "read {} ({} band(s)) from {}",
        raster.size(),
        raster.num_bands(),
        args.input.display()
    );

    let app = GeodesicFiltersApp::new(GeodesicFilterConfig {
        channel: args.channel,
        structuring_element,
        operation,
    })?;
    let filtered = app.run(&raster)?;

    write_band(&args.output, &filtered)?;
    log::info!("wrote {}", args.output.display());

    Ok(())
}
