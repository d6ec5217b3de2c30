//! Walk through a geometric derivation: drag a vertex, calculate, answer.
//!
//! Usage:
//!   cargo run -p heron --example walkthrough

use heron::prelude::*;

fn main() {
    let mut w = HeronWidget::default();
    w.press_vertex(VertexIndex::V1);
    for y in [40.0, 30.0, 20.0] {
        w.drag_to(Vertex::new(250.0, y));
        println!("dragging: sides {}", w.live_sides());
    }
    w.release_vertex();

    let session = match w.calculate(InputMode::Geometric) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("{e}");
            return;
        }
    };
    let s = session.result().semi_perimeter;
    println!("sides {}", session.sides());

    // A near miss, then the right value, then skip the area.
    for guess in [format!("{:.3}", s + 0.05), format!("{s}")] {
        let outcome = w.submit_step_answer(StepField::SemiPerimeter, &guess);
        println!("s = {guess}: {outcome:?}");
    }
    let _ = w.skip_step(StepField::Area);

    if let Some(session) = w.session() {
        for (i, step) in session.revealed_steps().iter().enumerate() {
            println!("{}\n{}", step.label, step.formula);
            if session.answer_revealed(i) {
                println!("= {}", step.answer_display());
            }
        }
    }
    println!("state: {:?}", w.state());
}
