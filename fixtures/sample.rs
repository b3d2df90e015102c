// Demo program
use std::io;

/* block
   comment */
pub fn suma(a: i32, b: i32) -> i32 {
    let mut total = a + b;
    total += 1;
    for i in 0..=10 {
        if i >= 5 && total != 0 { total--; }
    }
    let ratio = 2.5f64 * 1.0;
    let n = 255u8;
    let año = "línea\t\"dos\"";
    println!("{}", año);
    return total;
}
