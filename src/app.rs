//! Driving loop
//!
//! Glue between the physics core and the outside world. Input arrives as
//! discrete [`InputEvent`]s, drawing goes through a [`Renderer`]. Pausing is
//! handled here by skipping `World::update`; the core has no pause state.

use std::collections::VecDeque;

use glam::DVec2;

use crate::sim::{Ball, Scenario, World};

/// Discrete events from the input source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Window closed
    Quit,
    TogglePause,
    /// Space key (toggles pause)
    Space,
    /// Escape key (quits)
    Escape,
}

/// Supplies input events once per frame
pub trait InputSource {
    fn poll_events(&mut self, out: &mut Vec<InputEvent>);
}

/// Draws circles; implemented by whatever owns the window
pub trait Renderer {
    fn begin_frame(&mut self);
    /// Draw a circle centered at `center` with diameter `2 * radius`
    fn draw_circle(&mut self, center: DVec2, radius: f64);
    fn end_frame(&mut self);
}

/// Pre-recorded input, one batch of events per frame
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    frames: VecDeque<Vec<InputEvent>>,
}

impl ScriptedInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue events for the next unscripted frame
    pub fn push_frame(&mut self, events: Vec<InputEvent>) -> &mut Self {
        self.frames.push_back(events);
        self
    }

    /// Queue `n` frames with no events
    pub fn idle(&mut self, n: usize) -> &mut Self {
        for _ in 0..n {
            self.frames.push_back(Vec::new());
        }
        self
    }
}

impl InputSource for ScriptedInput {
    fn poll_events(&mut self, out: &mut Vec<InputEvent>) {
        if let Some(events) = self.frames.pop_front() {
            out.extend(events);
        }
    }
}

/// Input source that never produces events, for unattended runs
#[derive(Debug, Clone, Copy, Default)]
pub struct NoInput;

impl InputSource for NoInput {
    fn poll_events(&mut self, _out: &mut Vec<InputEvent>) {}
}

/// What the loop should do after handling input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Arena plus the balls it moves, and loop bookkeeping
#[derive(Debug, Clone)]
pub struct Simulation {
    pub world: World,
    pub balls: Vec<Ball>,
    pub paused: bool,
    /// Frames rendered
    pub frames: u64,
    /// `World::update` calls made
    pub ticks: u64,
}

impl Simulation {
    pub fn new(world: World, balls: Vec<Ball>) -> Self {
        Self {
            world,
            balls,
            paused: false,
            frames: 0,
            ticks: 0,
        }
    }

    pub fn handle_event(&mut self, event: InputEvent) -> Flow {
        match event {
            InputEvent::Quit | InputEvent::Escape => Flow::Quit,
            InputEvent::TogglePause | InputEvent::Space => {
                self.paused = !self.paused;
                log::info!("{}", if self.paused { "Paused" } else { "Resumed" });
                Flow::Continue
            }
        }
    }

    /// Advance one frame: update unless paused, then draw every ball
    ///
    /// The update always completes before any ball is drawn.
    pub fn frame<R: Renderer + ?Sized>(&mut self, renderer: &mut R) {
        if !self.paused {
            self.world.update(&mut self.balls);
            self.ticks += 1;
        }
        renderer.begin_frame();
        for ball in &self.balls {
            renderer.draw_circle(ball.pos, ball.radius());
        }
        renderer.end_frame();
        self.frames += 1;
    }
}

impl From<Scenario> for Simulation {
    fn from(scenario: Scenario) -> Self {
        Self::new(scenario.world, scenario.balls)
    }
}

/// How a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub frames: u64,
    pub ticks: u64,
    pub quit: bool,
}

/// Run frames until a quit event or `max_frames`
pub fn run<I, R>(
    sim: &mut Simulation,
    input: &mut I,
    renderer: &mut R,
    max_frames: u64,
) -> RunSummary
where
    I: InputSource + ?Sized,
    R: Renderer + ?Sized,
{
    let start_frames = sim.frames;
    let start_ticks = sim.ticks;
    let mut events = Vec::new();
    let mut quit = false;

    while sim.frames - start_frames < max_frames {
        events.clear();
        input.poll_events(&mut events);
        if events.iter().any(|&e| sim.handle_event(e) == Flow::Quit) {
            log::info!("Quit requested after {} frames", sim.frames - start_frames);
            quit = true;
            break;
        }
        sim.frame(renderer);
    }

    RunSummary {
        frames: sim.frames - start_frames,
        ticks: sim.ticks - start_ticks,
        quit,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Records what was drawn each frame
    #[derive(Default)]
    struct Recorder {
        frames: Vec<Vec<(DVec2, f64)>>,
    }

    impl Renderer for Recorder {
        fn begin_frame(&mut self) {
            self.frames.push(Vec::new());
        }

        fn draw_circle(&mut self, center: DVec2, radius: f64) {
            self.frames.last_mut().unwrap().push((center, radius));
        }

        fn end_frame(&mut self) {}
    }

    fn sim() -> Simulation {
        let world = World::new(640.0, 480.0, 1.0).unwrap();
        let balls = vec![
            Ball::new(DVec2::new(100.0, 100.0), DVec2::new(1.0, 0.0), 10.0, 1.0).unwrap(),
        ];
        Simulation::new(world, balls)
    }

    #[test]
    fn test_frame_updates_before_drawing() {
        let mut sim = sim();
        let mut recorder = Recorder::default();
        sim.frame(&mut recorder);
        assert_eq!(recorder.frames, vec![vec![(DVec2::new(101.0, 100.0), 10.0)]]);
        assert_eq!(sim.ticks, 1);
    }

    #[test]
    fn test_space_pauses_and_resumes() {
        let mut sim = sim();
        let mut recorder = Recorder::default();
        let mut input = ScriptedInput::new();
        input
            .push_frame(vec![InputEvent::Space])
            .idle(2)
            .push_frame(vec![InputEvent::TogglePause])
            .idle(1);

        let summary = run(&mut sim, &mut input, &mut recorder, 5);
        assert_eq!(summary, RunSummary { frames: 5, ticks: 2, quit: false });
        // paused frames still render, at the same position
        assert_eq!(recorder.frames[0], recorder.frames[2]);
        assert_eq!(sim.balls[0].pos.x, 102.0);
    }

    #[test]
    fn test_escape_quits() {
        let mut sim = sim();
        let mut recorder = Recorder::default();
        let mut input = ScriptedInput::new();
        input.idle(3).push_frame(vec![InputEvent::Escape]);

        let summary = run(&mut sim, &mut input, &mut recorder, 100);
        assert!(summary.quit);
        assert_eq!(summary.frames, 3);
        assert_eq!(recorder.frames.len(), 3);
    }

    #[test]
    fn test_no_input_runs_to_frame_limit() {
        let mut sim = sim();
        let mut recorder = Recorder::default();
        let summary = run(&mut sim, &mut NoInput, &mut recorder, 250);
        assert_eq!(summary, RunSummary { frames: 250, ticks: 250, quit: false });
        assert_eq!(recorder.frames.len(), 250);

        let mut events = Vec::new();
        NoInput.poll_events(&mut events);
        assert!(events.is_empty());
    }

    #[test]
    fn test_from_scenario() {
        let config = crate::sim::ScenarioConfig {
            count: 4,
            seed: Some(3),
            ..Default::default()
        };
        let sim = Simulation::from(Scenario::generate(&config).unwrap());
        assert_eq!(sim.balls.len(), 4);
        assert!(!sim.paused);
    }
}
