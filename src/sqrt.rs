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

use crate::BigInt;

impl BigInt {
    // floor of the square root, by Newton (Heron) iteration.
    // panics on negative values.
    pub fn sqrt(&self) -> BigInt {
        assert!(!self.is_negative(), "BigInt::sqrt - square root of a negative value");
        if self.is_zero() || self.is_one() {
            return self.clone();
        }
        let two = BigInt::from_u64(2);
        // self / 2 >= sqrt(self) for self >= 4, and is already the answer for 2 and 3.
        let mut x = self.quotient(&two);
        let mut rounds = 0;
        // from here on we maintain the invariant: x >= floor(sqrt(self)).
        // the estimates shrink strictly until the floor is reached.
        loop {
            let next = x.sum(&self.quotient(&x)).quotient(&two);
            if next >= x {
                log::trace!("BigInt::sqrt - converged after {rounds} rounds");
                return x;
            }
            x = next;
            rounds += 1;
        }
    }
}
