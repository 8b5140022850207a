use rasterkit::colour::{Rgba, CYAN, FOREST_GREEN, HOT_PINK, LIME, ORANGE, RED, WHITE, YELLOW};
use rasterkit::display::{Display, InputEvent, RenderTarget, DEFAULT_HEIGHT, DEFAULT_WIDTH};
use rasterkit::math2d::{DOWN, LEFT, RIGHT, UP};
use rasterkit::util::{FpsCounter, Rng};
use rasterkit::{
    catmull_rom, is_colliding, Circle, CurvedRect, FrameBuffer, Polygon, Rect, Scene, Shape, Style,
    Triangle, Vec2,
};
use sdl2::keyboard::Keycode;
use std::f32::consts::{FRAC_PI_2, TAU};
use std::path::PathBuf;

const SCENE_FILE: &str = "scene.json";
/// Seed for the triangulation debug colours, fixed so they don't flicker
const DEBUG_SEED: u64 = 0x5eed;

struct Options {
    width: u32,
    height: u32,
    vsync: bool,
    scene: Option<PathBuf>,
}

/// Parse command line arguments
fn parse_args() -> Options {
    let args: Vec<String> = std::env::args().collect();
    let mut opts = Options {
        width: DEFAULT_WIDTH,
        height: DEFAULT_HEIGHT,
        vsync: true,
        scene: None,
    };

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--no-vsync" => opts.vsync = false,
            "--width" | "-w" => {
                if i + 1 < args.len() {
                    if let Ok(w) = args[i + 1].parse::<u32>() {
                        opts.width = w;
                    }
                    i += 1;
                }
            },
            "--height" | "-h" => {
                if i + 1 < args.len() {
                    if let Ok(h) = args[i + 1].parse::<u32>() {
                        opts.height = h;
                    }
                    i += 1;
                }
            },
            "--resolution" | "-r" => {
                if i + 1 < args.len() {
                    // Parse WxH format (e.g., 1920x1080)
                    if let Some((w, h)) = args[i + 1].split_once('x') {
                        if let (Ok(w), Ok(h)) = (w.parse::<u32>(), h.parse::<u32>()) {
                            opts.width = w;
                            opts.height = h;
                        }
                    }
                    i += 1;
                }
            },
            "--scene" | "-s" => {
                if i + 1 < args.len() {
                    opts.scene = Some(PathBuf::from(&args[i + 1]));
                    i += 1;
                }
            },
            "--help" => {
                println!("Usage: rasterkit-demo [OPTIONS]");
                println!();
                println!("Options:");
                println!(
                    "  --width W, -w W       Set window width (default: {})",
                    DEFAULT_WIDTH
                );
                println!(
                    "  --height H, -h H      Set window height (default: {})",
                    DEFAULT_HEIGHT
                );
                println!("  --resolution WxH, -r WxH  Set resolution (e.g., 1920x1080)");
                println!("  --scene PATH, -s PATH Load a JSON scene instead of the showcase");
                println!("  --no-vsync            Disable VSync for uncapped framerate");
                println!("  --help                Show this help message");
                std::process::exit(0);
            },
            other => log::warn!("ignoring unknown argument '{}'", other),
        }
        i += 1;
    }

    opts
}

/// One of each shape, laid out for the default window size
fn showcase() -> rasterkit::Result<Scene> {
    let mut scene = Scene::new("showcase").with_background(Rgba::rgb(39, 45, 53));

    scene.add(Rect::new(160.0, 100.0, Vec2::new(60.0, 60.0)).with_style(Style::solid(RED)));
    scene.add(
        Rect::new(160.0, 100.0, Vec2::new(260.0, 60.0))
            .with_style(Style::outline(ORANGE, 6.0).with_bloom(12)),
    );
    scene.add(
        CurvedRect::new(180.0, 100.0, 24.0, Vec2::new(460.0, 60.0))
            .with_style(Style::solid(CYAN).with_bloom(10)),
    );
    scene.add(
        CurvedRect::new(180.0, 100.0, 30.0, Vec2::new(680.0, 60.0))
            .with_style(Style::outline(HOT_PINK, 4.0)),
    );
    scene.add(
        Circle::new(120.0, Vec2::new(140.0, 300.0)).with_style(Style::solid(YELLOW).with_bloom(20)),
    );
    scene.add(Circle::new(120.0, Vec2::new(340.0, 300.0)).with_style(Style::outline(LIME, 5.0)));
    scene.add(
        Triangle::new(
            Vec2::new(460.0, 360.0),
            Vec2::new(640.0, 360.0),
            Vec2::new(550.0, 230.0),
        )
        .with_style(Style::solid(Rgba::new(120, 80, 255, 200))),
    );

    // Five pointed star, concave
    let star = (0..10)
        .map(|i| {
            let a = i as f32 * TAU / 10.0 - FRAC_PI_2;
            let r = if i % 2 == 0 { 90.0 } else { 38.0 };
            Vec2::new(800.0 + r * a.cos(), 300.0 + r * a.sin())
        })
        .collect();
    scene.add(Polygon::new(star)?.with_style(Style::solid(WHITE.with_alpha(220))));

    Ok(scene)
}

// ============================================================================
// Snake
// ============================================================================

const SEGMENTS: usize = 40;
const HEAD_SIZE: f32 = 30.0;
const BODY_SCALE: f32 = 0.97;
const SPEED: f32 = 400.0;
const MARKER_SIZE: f32 = 4.0;
const SPLINE_STEPS: usize = 20;

/// A chain of circles that follows its head, skinned with a polygon and a
/// spline outline through the circles' side points
struct Snake {
    head: Circle,
    body: Vec<Circle>,
    heading: Option<Vec2>,
}

impl Snake {
    fn new(head_pos: Vec2) -> Self {
        let head = Circle::new(HEAD_SIZE, head_pos).with_direction(UP);
        // Start stretched out below the head, then pull the chain together
        let body = (1..SEGMENTS)
            .map(|i| {
                let diameter = HEAD_SIZE * BODY_SCALE.powi(i as i32);
                Circle::new(diameter, head_pos + DOWN * (HEAD_SIZE * i as f32 + 1.0))
                    .with_style(Style::outline(WHITE, 2.0))
            })
            .collect();
        let mut snake = Self {
            head,
            body,
            heading: None,
        };
        snake.follow();
        snake
    }

    fn update(&mut self, dt: f32, buf: &FrameBuffer) {
        let Some(heading) = self.heading else {
            return;
        };
        let next = self.head.centre + heading * (SPEED * dt);
        // Stay a head radius away from the window edges
        if buf
            .contains_with_margin(next, self.head.radius())
            .unwrap_or(false)
        {
            self.head.centre = next;
        }
        self.head.direction = heading;
        self.follow();
    }

    /// Drag each segment to within one diameter of the one ahead of it
    fn follow(&mut self) {
        let mut ahead = self.head;
        for node in &mut self.body {
            let diff = ahead.centre - node.centre;
            if diff.magnitude() > ahead.diameter {
                node.translate(diff - diff.set_magnitude(ahead.diameter));
                let towards = (ahead.centre - node.centre).normalise();
                if towards != Vec2::zero() {
                    node.direction = towards;
                }
            }
            ahead = *node;
        }
    }

    /// Side points of every circle, walking down the left side and back up
    /// the right, closed off by the head's front point
    fn outline(&self) -> Vec<Vec2> {
        let mut left = vec![self.head.edge_point(FRAC_PI_2)];
        let mut right = vec![self.head.edge_point(3.0 * FRAC_PI_2)];
        for node in &self.body {
            left.push(node.edge_point(FRAC_PI_2));
            right.push(node.edge_point(3.0 * FRAC_PI_2));
        }
        left.extend(right.into_iter().rev());
        left.push(self.head.edge_point(0.0));
        left
    }

    fn draw(&self, buf: &mut FrameBuffer, debug: bool) {
        let outline = self.outline();

        // The body folds over itself on tight turns; skip the fill then
        match Polygon::new(outline.clone()) {
            Ok(body) => {
                let body = body.with_style(Style::solid(Rgba::rgb(20, 70, 20)));
                if debug {
                    body.draw_debug(buf, &mut Rng::new(DEBUG_SEED));
                } else {
                    body.draw(buf);
                }
            },
            Err(e) => log::debug!("snake body not filled: {}", e),
        }

        if debug {
            for node in &self.body {
                node.draw(buf);
            }
            let marker = Style::solid(RED);
            for point in &outline {
                Circle::new(MARKER_SIZE, *point).with_style(marker).draw(buf);
            }
        }

        for point in catmull_rom(&outline, SPLINE_STEPS) {
            Circle::new(3.0, point)
                .with_style(Style::solid(LIME))
                .draw(buf);
        }

        self.head
            .with_style(Style::solid(FOREST_GREEN))
            .draw_segment(buf, -FRAC_PI_2);
    }
}

fn steer(key: Keycode) -> Option<Vec2> {
    match key {
        Keycode::W | Keycode::Up => Some(UP),
        Keycode::A | Keycode::Left => Some(LEFT),
        Keycode::S | Keycode::Down => Some(DOWN),
        Keycode::D | Keycode::Right => Some(RIGHT),
        _ => None,
    }
}

fn main() -> Result<(), rasterkit::Error> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let opts = parse_args();
    let (width, height) = (opts.width, opts.height);

    let (mut display, texture_creator) =
        Display::with_options("rasterkit", width, height, opts.vsync)?;
    let mut target = RenderTarget::with_size(&texture_creator, width, height)?;
    let mut buffer = FrameBuffer::new(width, height)?;

    // FPS counter with 60 sample rolling average
    let mut fps_counter = FpsCounter::new(60);
    let mut show_fps = false;
    let mut debug = false;

    let scene = match &opts.scene {
        Some(path) => Scene::load(path)?,
        None => showcase()?,
    };
    let mut snake = Snake::new(Vec2::new(width as f32 / 2.0, height as f32 * 0.75));

    println!("=== rasterkit ===");
    println!("Resolution: {}x{}", width, height);
    if opts.vsync {
        println!("VSync: ON (60fps locked). Use --no-vsync for uncapped.");
    } else {
        println!("VSync: OFF (uncapped framerate)");
    }
    println!("Scene: {} ({} shapes)", scene.name, scene.shapes.len());
    println!("Use --help for command line options.");
    println!("Controls:");
    println!("  WASD/Arrows - Steer the snake");
    println!("  Tab         - Toggle triangulation debug view");
    println!("  F           - Toggle FPS in the title bar");
    println!("  P           - Save scene to {}", SCENE_FILE);
    println!("  Escape      - Quit");

    'main: loop {
        let (dt, avg_fps) = fps_counter.tick();

        for event in display.poll_events() {
            match event {
                InputEvent::Quit => break 'main,
                InputEvent::KeyDown(key) => match key {
                    Keycode::Escape => break 'main,
                    Keycode::Tab => debug = !debug,
                    Keycode::F => {
                        show_fps = !show_fps;
                        if !show_fps {
                            display.set_title("rasterkit")?;
                        }
                    },
                    Keycode::P => match scene.save(SCENE_FILE) {
                        Ok(()) => log::info!("scene saved to {}", SCENE_FILE),
                        Err(e) => log::error!("failed to save scene: {}", e),
                    },
                    _ => {
                        if let Some(dir) = steer(key) {
                            snake.heading = Some(dir);
                        }
                    },
                },
                InputEvent::KeyUp(key) => {
                    if steer(key).is_some() && steer(key) == snake.heading {
                        snake.heading = None;
                    }
                },
                InputEvent::MouseDown { x, y, .. } => {
                    let point = Vec2::new(x as f32, y as f32);
                    match scene.shape_at(point) {
                        Some(shape) => log::info!("{} is inside {:?}", point, shape.bounds()),
                        None => log::info!("{} is on the background", point),
                    }
                },
                _ => {},
            }
        }

        snake.update(dt, &buffer);

        scene.draw(&mut buffer);
        if debug {
            let mut rng = Rng::new(DEBUG_SEED);
            for shape in &scene.shapes {
                if let Shape::Polygon(polygon) = shape {
                    polygon.draw_debug(&mut buffer, &mut rng);
                }
            }
        }

        // Frame every shape the snake's head is touching
        let head = Shape::from(snake.head);
        for shape in scene.shapes.iter().filter(|s| is_colliding(&head, s)) {
            let b = shape.bounds();
            Rect::new(b.width(), b.height(), b.min)
                .with_style(Style::outline(YELLOW, 2.0))
                .draw(&mut buffer);
        }

        snake.draw(&mut buffer, debug);

        if show_fps {
            let ms = fps_counter.avg_frame_time_ms();
            display.set_title(&format!("rasterkit - {} fps ({:.1}ms)", avg_fps as u32, ms))?;
        }

        display.present(&mut target, &buffer)?;
    }

    Ok(())
}
