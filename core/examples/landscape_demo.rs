use landscape::{generate, sigmoid};

fn main() {
    // Generate a 50×50 landscape with 3 components from seed 42
    let field = generate(50, 50, 3, 42).expect("valid parameters");
    let probs = sigmoid(&field);

    // Print the top-left 8×8 corner of both
    for row in field.iter().take(8) {
        for v in row.iter().take(8) {
            print!("{:>8.3} ", v);
        }
        println!();
    }
    println!();
    for row in probs.iter().take(8) {
        for v in row.iter().take(8) {
            print!("{:>6.3} ", v);
        }
        println!();
    }
}
