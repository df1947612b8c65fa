//! Interactive menu for exploring the six cloud shapes.
//! Prints the bounding box, centroid and a few raw samples of a fresh cloud.

use cloud_shapes::{generate, Point3D, ShapeKind};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io::{self, Write};

fn main() {
    println!();
    println!("╔══════════════════════════════════════════════════════╗");
    println!("║            Particle Cloud Shape Explorer             ║");
    println!("╚══════════════════════════════════════════════════════╝");
    println!();

    loop {
        print_menu();
        let choice = read_line("Select a shape (1–6, or q to quit): ");

        if choice.trim().eq_ignore_ascii_case("q") {
            println!("\nGoodbye!\n");
            break;
        }

        let kind = match choice.trim().parse::<usize>() {
            Ok(n @ 1..=6) => ShapeKind::all()[n - 1],
            _ => match choice.trim().parse::<ShapeKind>() {
                Ok(k)  => k,
                Err(e) => { println!("  ⚠  {}\n", e); continue; }
            },
        };

        let n: usize = read_line("  How many points? (default 20000): ")
            .trim().parse().unwrap_or(20_000);
        let n = n.max(1).min(1_000_000);

        let seed: u64 = read_line("  Seed (default 0): ")
            .trim().parse().unwrap_or(0);

        let mut rng = StdRng::seed_from_u64(seed);
        let cloud = generate(kind, n, &mut rng);
        let (lo, hi, centre) = extent(&cloud);

        println!();
        println!("  ┌─ {} ({}) ─", kind.label(), kind.name());
        println!("  │  Points    : {}", n);
        println!("  │  Min       : ({:8.3}, {:8.3}, {:8.3})", lo.x, lo.y, lo.z);
        println!("  │  Max       : ({:8.3}, {:8.3}, {:8.3})", hi.x, hi.y, hi.z);
        println!("  │  Centroid  : ({:8.3}, {:8.3}, {:8.3})", centre.x, centre.y, centre.z);
        println!("  │");
        println!("  │  First samples:");
        for (i, p) in cloud.iter().take(8).enumerate() {
            println!("  │    #{:<3} ({:8.3}, {:8.3}, {:8.3})", i, p.x, p.y, p.z);
        }
        println!("  └─");
        println!();
    }
}

fn extent(cloud: &[Point3D]) -> (Point3D, Point3D, Point3D) {
    let mut lo  = Point3D::new(f32::MAX, f32::MAX, f32::MAX);
    let mut hi  = Point3D::new(f32::MIN, f32::MIN, f32::MIN);
    let mut sum = (0.0f64, 0.0f64, 0.0f64);
    for p in cloud {
        lo = Point3D::new(lo.x.min(p.x), lo.y.min(p.y), lo.z.min(p.z));
        hi = Point3D::new(hi.x.max(p.x), hi.y.max(p.y), hi.z.max(p.z));
        sum.0 += p.x as f64;
        sum.1 += p.y as f64;
        sum.2 += p.z as f64;
    }
    let n = cloud.len().max(1) as f64;
    let centre = Point3D::new((sum.0 / n) as f32, (sum.1 / n) as f32, (sum.2 / n) as f32);
    (lo, hi, centre)
}

fn print_menu() {
    println!("  ┌──────────────────────────────────────────────────────┐");
    for (i, k) in ShapeKind::all().iter().enumerate() {
        println!("  │  {}. {:8} ({:45}│", i + 1, k.label(), format!("{})", k.name()));
    }
    println!("  └──────────────────────────────────────────────────────┘");
    println!();
}

fn read_line(prompt: &str) -> String {
    print!("{}", prompt);
    io::stdout().flush().ok();
    let mut buf = String::new();
    io::stdin().read_line(&mut buf).ok();
    buf
}
