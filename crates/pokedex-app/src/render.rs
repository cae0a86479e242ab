use pokedex_types::PokemonEntry;

use crate::lookup::DisplayName;

const BAR_WIDTH: usize = 40;
const LABEL_WIDTH: usize = 18;
const COLUMN_WIDTH: usize = 36;

/// Single-entry card followed by its stat chart
pub fn render_entry(entry: &PokemonEntry, title: &DisplayName) -> String {
    let mut lines = vec![
        title.to_string(),
        format!("Sprite : {}", entry.sprite_url().unwrap_or("-")),
        format!("Types  : {}", type_line(entry)),
        String::new(),
        "Statistiques".to_string(),
    ];
    lines.extend(entry.stats.iter().map(|stat| {
        format!(
            "  {:<width$}{:>4}",
            stat.stat.name,
            stat.base_stat,
            width = LABEL_WIDTH
        )
    }));
    lines.push(String::new());
    lines.push("Valeur (base stat)".to_string());

    let mut out = join_lines(lines);
    out.push_str(&render_stats_chart(&stat_rows(entry)));
    out
}

/// Horizontal bars scaled from zero to the largest value
pub fn render_stats_chart(rows: &[(String, u32)]) -> String {
    let max = rows.iter().map(|(_, v)| *v).max().unwrap_or(0).max(1);

    join_lines(rows.iter().map(|(label, value)| {
        format!(
            "  {:<width$}{:<bar$} {}",
            label.to_uppercase(),
            bar(*value, max),
            value,
            width = LABEL_WIDTH,
            bar = BAR_WIDTH
        )
    }))
}

/// Two cards side by side, then one pair of bars per stat
pub fn render_comparison(
    first: &PokemonEntry,
    first_name: &DisplayName,
    second: &PokemonEntry,
    second_name: &DisplayName,
) -> String {
    let rows = paired_stats(first, second);

    let mut lines = vec![
        columns(&first_name.to_string(), &second_name.to_string()),
        columns(
            first.sprite_url().unwrap_or("-"),
            second.sprite_url().unwrap_or("-"),
        ),
        columns(&type_line(first), &type_line(second)),
        String::new(),
    ];
    for (label, a, b) in &rows {
        let left = format!("{:<width$}{:>4}", label, a, width = LABEL_WIDTH);
        let right = format!("{:<width$}{:>4}", label, b, width = LABEL_WIDTH);
        lines.push(columns(&left, &right));
    }
    lines.push(String::new());

    let max = rows
        .iter()
        .flat_map(|(_, a, b)| [*a, *b])
        .max()
        .unwrap_or(0)
        .max(1);
    for (label, a, b) in &rows {
        lines.push(format!("  {}", label.to_uppercase()));
        for (name, value) in [(&first_name.name, *a), (&second_name.name, *b)] {
            lines.push(format!(
                "    {:<width$}{:<bar$} {}",
                name,
                bar(value, max),
                value,
                width = LABEL_WIDTH - 2,
                bar = BAR_WIDTH
            ));
        }
    }

    join_lines(lines)
}

/// Every line newline-terminated
fn join_lines(lines: impl IntoIterator<Item = String>) -> String {
    lines.into_iter().fold(String::new(), |mut out, line| {
        out.push_str(&line);
        out.push('\n');
        out
    })
}

fn type_line(entry: &PokemonEntry) -> String {
    let types = entry.type_names();
    if types.is_empty() {
        "-".to_string()
    } else {
        types.join(", ")
    }
}

fn stat_rows(entry: &PokemonEntry) -> Vec<(String, u32)> {
    entry
        .stats
        .iter()
        .map(|s| (s.stat.name.clone(), s.base_stat))
        .collect()
}

/// Stats of `first` in order, matched by name in `second` (0 when missing),
/// then any stat only `second` has
fn paired_stats(first: &PokemonEntry, second: &PokemonEntry) -> Vec<(String, u32, u32)> {
    let value_in = |entry: &PokemonEntry, name: &str| {
        entry
            .stats
            .iter()
            .find(|s| s.stat.name == name)
            .map(|s| s.base_stat)
            .unwrap_or(0)
    };

    let mut rows: Vec<(String, u32, u32)> = first
        .stats
        .iter()
        .map(|s| (s.stat.name.clone(), s.base_stat, value_in(second, &s.stat.name)))
        .collect();

    for stat in &second.stats {
        if !rows.iter().any(|(name, _, _)| *name == stat.stat.name) {
            rows.push((stat.stat.name.clone(), 0, stat.base_stat));
        }
    }

    rows
}

fn bar(value: u32, max: u32) -> String {
    let len = (value as usize * BAR_WIDTH + max as usize / 2) / max as usize;
    "█".repeat(len.min(BAR_WIDTH))
}

fn columns(left: &str, right: &str) -> String {
    format!("{:<width$}  {}", left, right, width = COLUMN_WIDTH)
        .trim_end()
        .to_string()
}
