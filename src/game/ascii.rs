//! ASCII art for the `ascii` command.

/// A crewmate, inside a code block.
pub const CREWMATE: &str = r"```
          ___________
         /           \
        |     ________|___
        |    |            |
        |    |____________|
      __|                 |
     |  |                 |
     |  |                 |
     |__|                 |
        |      _____      |
        |     |     |     |
        |_____|     |_____|
```";

const SKY_TOP: [&str; 3] = [
    ".      .        *        .      .     *",
    "   *        .        .       *      .  ",
    " .     .        ඞ      .        .     *",
];

const SKY_BOTTOM: [&str; 2] = [
    "   .       *        .      .       *   ",
    " *     .       .        *       .      ",
];

/// A starfield with an ejected crewmate and two centered caption lines.
pub fn starfield(verdict: &str, remaining: &str) -> String {
    let width = SKY_TOP[0].chars().count();
    let mut lines: Vec<String> = SKY_TOP.iter().map(|l| l.to_string()).collect();
    lines.push(center(verdict, width));
    lines.push(center(remaining, width));
    lines.extend(SKY_BOTTOM.iter().map(|l| l.to_string()));
    format!("```\n{}\n```", lines.join("\n"))
}

fn center(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len >= width {
        return text.to_string();
    }
    let pad = (width - len) / 2;
    format!("{}{}", " ".repeat(pad), text)
}
