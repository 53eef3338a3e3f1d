use rand::Rng;

/// Builds a random formula that always parses.
///
/// Each draw picks from `0..=10`. A subformula becomes a leaf when `depth`
/// is exhausted or the draw is below 3; leaves are a digit `1..=9` or a
/// lowercase letter. Otherwise one in five subformulas is a negation and the
/// rest are parenthesized binary operations.
pub fn random_formula<R: Rng + ?Sized>(rng: &mut R, depth: u32) -> String {
    let mut out = String::new();
    write_formula(rng, depth, &mut out);
    out
}

fn draw<R: Rng + ?Sized>(rng: &mut R) -> u32 {
    rng.gen_range(0..=10)
}

fn write_formula<R: Rng + ?Sized>(rng: &mut R, depth: u32, out: &mut String) {
    if depth == 0 || draw(rng) < 3 {
        if draw(rng) % 2 == 1 {
            out.push(char::from(b'1' + (draw(rng) % 9) as u8));
        } else {
            out.push(char::from(b'a' + (draw(rng) % 26) as u8));
        }
        return;
    }
    if draw(rng) % 5 == 0 {
        out.push('-');
        write_formula(rng, depth - 1, out);
        return;
    }
    let op = match draw(rng) % 4 {
        0 => '+',
        1 => '-',
        2 => '*',
        _ => '/',
    };
    out.push('(');
    write_formula(rng, depth - 1, out);
    out.push(' ');
    out.push(op);
    out.push(' ');
    write_formula(rng, depth - 1, out);
    out.push(')');
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn generated_formulas_parse() {
        let mut rng = StdRng::seed_from_u64(7);
        for depth in 0..6 {
            for _ in 0..50 {
                let f = random_formula(&mut rng, depth);
                assert!(parse(&f).is_ok(), "failed to parse {f:?}");
            }
        }
    }

    #[test]
    fn depth_zero_is_a_leaf() {
        let mut rng = StdRng::seed_from_u64(1);
        let f = random_formula(&mut rng, 0);
        assert_eq!(f.len(), 1);
        assert!(parse(&f).unwrap().is_leaf());
    }
}
