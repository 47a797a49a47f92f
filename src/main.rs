use stability_fractals::{
    CliRenderController, CpuSampler, PpmFilePresenter, RenderConfig, ZoomBenchmark, init_logging,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = match std::env::args_os().nth(1) {
        Some(path) => RenderConfig::from_json_file(path)?,
        None => RenderConfig::default(),
    };

    init_logging(config.log_level)?;

    let request = config.build_request()?;
    let mut controller = CliRenderController::new(PpmFilePresenter::new(), CpuSampler::new());

    controller.generate(&request)?;
    controller.write(&config.output)?;

    if let Some(benchmark) = config.benchmark {
        let report = ZoomBenchmark::new(CpuSampler::new(), benchmark, &config.zoom).run(&request)?;

        log::info!(
            "zoom benchmark: {} frames in {:.2?}",
            report.frame_durations.len(),
            report.total()
        );
    }

    Ok(())
}
