//! # Chain rule on a hand-sized graph
//!
//! Builds `L = (a * c + b) * a` with `a = 22`, `b = 3`, `c = 4`, runs the
//! backward pass, compares each gradient with a central difference, and
//! prints the graph in Graphviz format.
//!
//! ## Execution
//! `cargo run --example chain_rule | sed -n '/^digraph/,$p' | dot -Tsvg > graph.svg`

use scalargrad_core::autograd::finite_diff_grad;
use scalargrad_core::viz::to_dot;
use scalargrad_core::Value;

fn loss(a: f64, b: f64, c: f64) -> f64 {
    (a * c + b) * a
}

fn main() {
    let _ = env_logger::builder().try_init();

    let a = Value::with_label(22.0, "a");
    let b = Value::with_label(3.0, "b");
    let c = Value::with_label(4.0, "c");
    let e = (&a * &c).labeled("e");
    let d = (&e + &b).labeled("d");
    let l = (&d * &a).labeled("L");
    l.backward();

    let numerical = finite_diff_grad(|v: &[f64]| loss(v[0], v[1], v[2]), &[22.0, 3.0, 4.0], 1e-4);
    println!("L = {}", l.data());
    for (leaf, num) in [&a, &b, &c].iter().zip(&numerical) {
        println!(
            "dL/d{} = {} (numerical {:.4})",
            leaf.label().unwrap_or_default(),
            leaf.grad(),
            num
        );
    }
    println!("dL/dd = {}, dL/de = {}", d.grad(), e.grad());
    println!();
    print!("{}", to_dot(&l));
}
