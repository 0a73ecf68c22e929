//! Headless walkthrough: frames a small scene, plays a landmark tour, then
//! follows a moving actor with a second camera.

use std::path::Path;
use std::time::Duration;

use glam::DVec3;
use log::{error, info};
use lookout::camera::{
    AnimationStatus, CameraId, CameraManager, CameraType, LandmarkHop,
    TrackingMode,
};
use lookout::options::Options;
use lookout::scene::{BoundingBox, Scene};
use lookout::util::frame_timing::FrameClock;
use lookout::view::Interactor;

/// Stands in for a window's mouse/keyboard handler.
struct LoggingInteractor;

impl Interactor for LoggingInteractor {
    fn connect_camera(&mut self, camera: CameraId) {
        info!("input routed to {camera}");
    }

    fn disconnect_from_view(&mut self) {
        info!("input suspended");
    }

    fn reconnect_view(&mut self) {
        info!("input resumed");
    }
}

fn load_options() -> Options {
    match std::env::args().nth(1) {
        Some(path) => match Options::load(Path::new(&path)) {
            Ok(options) => options,
            Err(e) => {
                error!("Failed to load options from {path}: {e}");
                Options::default()
            }
        },
        None => Options::default(),
    }
}

/// Drive the cameras at roughly 60 frames per second until every
/// animation settles.
fn run_until_idle(cameras: &mut CameraManager, clock: &mut FrameClock) {
    let frame = Duration::from_millis(16);
    let mut frames = 0_u32;
    loop {
        std::thread::sleep(frame);
        let status = cameras.tick(clock.delta());
        if cameras.take_redraw_request() {
            frames += 1;
        }
        if status == AnimationStatus::Idle {
            break;
        }
    }
    info!("settled after {frames} redraws ({:.0} fps)", clock.fps());
}

fn main() {
    env_logger::init();

    let options = load_options();
    let mut scene = Scene::new();
    let rover = scene.add_actor(
        "rover",
        BoundingBox::from_extents([-1.0, 0.0, -2.0, 1.0, 1.5, 2.0]),
    );
    let _ = scene.add_actor(
        "terrain",
        BoundingBox::from_extents([-50.0, -1.0, -50.0, 50.0, 0.0, 50.0]),
    );

    let mut cameras = CameraManager::with_options(&options);
    cameras.set_viewport_size(1280, 720);
    cameras.set_interactor(Box::new(LoggingInteractor));

    let overview = cameras.active_mut();
    overview.long_shot(&mut scene);
    overview.set_landmark("overview");
    overview.create_landmark(
        "closeup",
        DVec3::new(4.0, 3.0, 6.0),
        DVec3::ZERO,
        None,
    );
    overview.create_landmark(
        "high",
        DVec3::new(0.0, 60.0, 5.0),
        DVec3::ZERO,
        Some(15.0),
    );
    overview.status();

    let _token = overview.do_landmark_animation(vec![
        LandmarkHop::new("closeup", 1500, 20.0),
        LandmarkHop::new("high", 1000, 20.0),
        LandmarkHop::new("overview", 800, 20.0),
    ]);
    let mut clock = FrameClock::default();
    run_until_idle(&mut cameras, &mut clock);
    cameras.active().status();

    let chase = cameras.create(CameraType::Orbiting);
    chase.set_position(DVec3::new(0.0, 4.0, 12.0));
    let mode = Some(TrackingMode::Translational);
    if let Err(e) = chase.follow(&mut scene, &rover.into(), mode) {
        error!("{e}");
        return;
    }
    if let Err(e) = cameras.switch_to(1) {
        error!("{e}");
        return;
    }

    for step in 1..=5 {
        let target = DVec3::new(f64::from(step) * 2.0, 0.0, 0.0);
        if let Err(e) = scene.move_actor(rover, target, &mut cameras) {
            error!("{e}");
            return;
        }
    }
    cameras.active().status();
}
