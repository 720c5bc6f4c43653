use camera::{
    CameraClient, CameraConfig, CameraIndex, CameraProperty, CameraResult, CaptureDevice,
    set_camera_properties,
};

fn main() -> CameraResult<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    camera::init();

    let config = CameraConfig::default()
        .with_width(1280)
        .with_height(720)
        .with_fps(25);

    let mut client = CameraClient::open(CameraIndex::Index(0), config)?;
    set_camera_properties(&mut client);

    let mut empty_frame_count = 0;
    for frame_count in 0..100 {
        // sweep exposure across its whole range
        let range = CameraProperty::ExposureAbsolute.range();
        let exposure = range.min + (range.max - range.min) * frame_count / 100;
        if let Err(e) = client.set_property(CameraProperty::ExposureAbsolute, exposure) {
            log::warn!("{e}");
        }

        match client.read_frame() {
            Ok(frame) => {
                if frame_count % 10 == 0 {
                    log::info!(
                        "Frame #{}: {}x{} exposure={}",
                        frame_count,
                        frame.width(),
                        frame.height(),
                        exposure
                    );
                }
            }
            Err(e) => {
                empty_frame_count += 1;
                log::warn!("{e}");
            }
        }
    }

    log::info!("{empty_frame_count} empty frames");
    client.release();
    Ok(())
}
