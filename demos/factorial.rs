/*
    Copyright 2024 M. Devi Prasad (dp@web3pleb.org)

    Licensed under the Apache License, Version 2.0 (the "License");
    you may not use this file except in compliance with the License.
    You may obtain a copy of the License at

    http://www.apache.org/licenses/LICENSE-2.0

    Unless required by applicable law or agreed to in writing, software
    distributed under the License is distributed on an "AS IS" BASIS,
    WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
    See the License for the specific language governing permissions and
    limitations under the License.
*/

// cargo run --example factorial -- 100
// RUST_LOG="debug" cargo run --example factorial

use bigint::{init_logger, BigInt};

fn factorial(n: u32) -> BigInt {
    (1..=n).map(BigInt::from).product()
}

fn main() {
    init_logger(false);
    let n: u32 = match std::env::args().nth(1) {
        Some(arg) => match arg.parse() {
            Ok(n) => n,
            Err(e) => {
                log::error!("expected a non-negative count; got {arg:?} ({e})");
                std::process::exit(1);
            }
        },
        None => 100,
    };

    let f = factorial(n);
    log::info!("{n}! has {} limbs", f.width());
    println!("{n}! = {f}");
    println!("{n}! = {f:#x}");

    let s = f.sqrt();
    println!("isqrt({n}!) = {s}");

    // (n/2)! divides n! exactly; a multi-limb divisor takes the long division path
    let half = factorial(n / 2);
    let (q, r) = f.div_rem(&half);
    log::info!("{n}! / ({}!) = {q} rem {r}", n / 2);
    assert!(r.is_zero());
    assert_eq!(&q * &half, f);
}
