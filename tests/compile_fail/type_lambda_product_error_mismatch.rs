//! `product` keeps the `Out2` slot its operands share.

use kinded::data::ResultTypeLambda;
use kinded::typeclass::{Kind, SemiProduct};

fn main() {
    let number: Result<i32, String> = Ok(1);
    let flag: Result<bool, String> = Ok(true);
    let paired = ResultTypeLambda::product::<(), String, _, _>(number, flag);
    let _: Kind<ResultTypeLambda, (), u8, (i32, bool)> = paired;
}
