//! `flat_map` cannot switch the `Out2` slot of its source.

use kinded::data::ResultTypeLambda;
use kinded::typeclass::{FlatMap, Kind};

fn main() {
    let number: Result<i32, String> = Ok(1);
    let next = ResultTypeLambda::flat_map::<(), String, _, _, _>(number, |n: i32| Ok(n + 1));
    let _: Kind<ResultTypeLambda, (), u8, i32> = next;
}
