use three_d::*;

use crate::log;
use crate::scene::Scene;
use crate::takeoff::{Phase, Position, Takeoff};

fn render_position(p: Position) -> Vec3 {
    vec3(p.x as f32, p.y as f32, p.z as f32)
}

pub fn main() {
    let window = Window::new(WindowSettings {
        title: "Liftoff".to_string(),
        #[cfg(not(target_arch = "wasm32"))]
        max_size: Some((1280, 720)),
        ..Default::default()
    })
    .expect("renderer::main(): ERROR: failed to create window.");
    let context = window.gl();

    let mut camera = Camera::new_perspective(
        window.viewport(),
        vec3(-50.0, 15.0, -145.0),
        vec3(0.0, 0.0, 0.0),
        vec3(0.0, 1.0, 0.0),
        degrees(75.0),
        0.1,
        1000.0,
    );

    let mut scene = Scene::new(&context);
    let mut takeoff = Takeoff::new(
        Position::new(0.0, 0.0, 0.0),
        Position::new(-50.0, 15.0, -145.0),
    );
    let mut frame: u64 = 0;

    window.render_loop(move |frame_input| {
        camera.set_viewport(frame_input.viewport);

        // Fixed step per display frame; elapsed time is deliberately ignored
        // so the trajectory depends on the frame count alone.
        let rolling = takeoff.phase == Phase::GroundRoll;
        takeoff.tick();
        frame += 1;
        if rolling && takeoff.phase == Phase::Airborne {
            log!(
                "renderer::main(): airborne at frame={}, z={:.1}",
                frame,
                takeoff.airplane.z
            );
        }

        scene.airplane.set_position(render_position(takeoff.airplane));

        // The observer keeps facing the airplane in every phase.
        camera.set_view(
            render_position(takeoff.observer),
            render_position(takeoff.airplane),
            vec3(0.0, 1.0, 0.0),
        );

        scene.render(&frame_input, &camera);

        FrameOutput::default()
    });
}
