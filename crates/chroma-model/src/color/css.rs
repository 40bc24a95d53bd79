//! Matcher for CSS functional color notation.
//!
//! Accepts exactly the inputs of the legacy patterns
//!
//! ```text
//! ^rgb\s?\(\s?(N)[,\s]*(N)[,\s]*(N)\s?\)
//! ^hsl\s?\((H)(?:[^0-9]*)?(P)(?:[^0-9]*)?(P)\s?%?\s?\)
//! ```
//!
//! (case-insensitive, unanchored at the end) but validates ranges on parsed
//! integers instead of encoding them in the pattern. Integer tokens are tried
//! in the same order the pattern's alternation tries them: two digits, one
//! digit, then the three-digit form. Backtracking over those choices
//! reproduces the pattern's captures, including splits such as
//! `rgb(1234)` -> `(12, 3, 4)`.

/// Grammar of one integer token.
#[derive(Debug, Clone, Copy)]
struct Component {
    /// Largest value the three-digit form may take
    max: u16,
    /// Leading digits allowed in the three-digit form
    leads: (u16, u16),
}

impl Component {
    /// Candidate `(length, value)` pairs at `pos`, in match-priority order.
    fn candidates(self, chars: &[char], pos: usize) -> impl Iterator<Item = (usize, u16)> {
        let digits: Vec<u16> = chars[pos..]
            .iter()
            .take(3)
            .map_while(|c| c.to_digit(10))
            .map(|d| d as u16)
            .collect();

        let two = (digits.len() >= 2).then(|| (2usize, digits[0] * 10 + digits[1]));
        let one = digits.first().map(|&d| (1usize, d));
        let three = (digits.len() == 3)
            .then(|| digits[0] * 100 + digits[1] * 10 + digits[2])
            .filter(|&v| (self.leads.0..=self.leads.1).contains(&digits[0]) && v <= self.max)
            .map(|v| (3usize, v));

        [two, one, three].into_iter().flatten()
    }
}

/// Channel token, 0..=255.
const CHANNEL: Component = Component {
    max: 255,
    leads: (1, 2),
};

/// Hue token, 0..=360.
const HUE: Component = Component {
    max: 360,
    leads: (1, 3),
};

/// Percentage token, 0..=100.
const PERCENT: Component = Component {
    max: 100,
    leads: (1, 1),
};

#[derive(Debug, Clone, Copy)]
enum Separator {
    /// `[,\s]*`
    CommaOrSpace,
    /// `(?:[^0-9]*)?`
    NonDigit,
}

impl Separator {
    // A separator never contains a digit and is always followed by a token,
    // so only the longest run can lead to a match.
    fn skip(self, chars: &[char], mut pos: usize) -> usize {
        while let Some(&c) = chars.get(pos) {
            let accepted = match self {
                Separator::CommaOrSpace => c == ',' || is_space(c),
                Separator::NonDigit => !c.is_ascii_digit(),
            };
            if !accepted {
                break;
            }
            pos += 1;
        }
        pos
    }
}

#[derive(Debug, Clone, Copy)]
enum Tail {
    /// `\s?\)`
    Paren,
    /// `\s?%?\s?\)`
    PercentParen,
}

impl Tail {
    fn matches(self, chars: &[char], pos: usize) -> bool {
        let mut pos = skip_one_space(chars, pos);
        if let Tail::PercentParen = self {
            if chars.get(pos) == Some(&'%') {
                pos += 1;
            }
            pos = skip_one_space(chars, pos);
        }
        chars.get(pos) == Some(&')')
    }
}

/// A CSS color function such as `rgb(...)` or `hsl(...)`.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Notation {
    name: &'static str,
    space_after_paren: bool,
    separator: Separator,
    tail: Tail,
    components: [Component; 3],
}

/// `rgb(r, g, b)`
pub(crate) const RGB: Notation = Notation {
    name: "rgb",
    space_after_paren: true,
    separator: Separator::CommaOrSpace,
    tail: Tail::Paren,
    components: [CHANNEL, CHANNEL, CHANNEL],
};

/// `hsl(h, s%, l%)`
pub(crate) const HSL: Notation = Notation {
    name: "hsl",
    space_after_paren: false,
    separator: Separator::NonDigit,
    tail: Tail::PercentParen,
    components: [HUE, PERCENT, PERCENT],
};

impl Notation {
    /// Match `input` and return the three captured integers.
    pub(crate) fn parse(&self, input: &str) -> Option<[u16; 3]> {
        let chars: Vec<char> = input.chars().collect();
        let start = self.prefix_end(&chars)?;
        let mut values = [0u16; 3];
        self.match_component(&chars, start, 0, &mut values)
            .then_some(values)
    }

    fn prefix_end(&self, chars: &[char]) -> Option<usize> {
        let mut pos = 0;
        for expected in self.name.chars() {
            let c = chars.get(pos)?;
            if !c.eq_ignore_ascii_case(&expected) {
                return None;
            }
            pos += 1;
        }

        pos = skip_one_space(chars, pos);
        if chars.get(pos) != Some(&'(') {
            return None;
        }
        pos += 1;

        if self.space_after_paren {
            pos = skip_one_space(chars, pos);
        }
        Some(pos)
    }

    fn match_component(
        &self,
        chars: &[char],
        pos: usize,
        index: usize,
        values: &mut [u16; 3],
    ) -> bool {
        for (len, value) in self.components[index].candidates(chars, pos) {
            values[index] = value;
            let end = pos + len;

            let matched = if index + 1 < values.len() {
                let next = self.separator.skip(chars, end);
                self.match_component(chars, next, index + 1, values)
            } else {
                self.tail.matches(chars, end)
            };

            if matched {
                return true;
            }
        }
        false
    }
}

/// ECMAScript `\s`: Unicode White_Space without NEL, plus the BOM.
fn is_space(c: char) -> bool {
    (c.is_whitespace() && c != '\u{85}') || c == '\u{feff}'
}

fn skip_one_space(chars: &[char], pos: usize) -> usize {
    match chars.get(pos) {
        Some(&c) if is_space(c) => pos + 1,
        _ => pos,
    }
}
