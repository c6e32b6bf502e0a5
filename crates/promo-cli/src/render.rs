//! Terminal rendering of recovered tables and derived views.

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use promo_ingest::RecoveryStats;
use promo_model::{CardPresentation, RecoveredTables, TableKind};
use promo_resolve::{CardPreview, DenormalizedRow, ResolutionEngine};

pub fn print_table_counts(tables: &RecoveredTables, stats: Option<&RecoveryStats>) {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Table"), header_cell("Records")]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for kind in TableKind::DETECTION_ORDER {
        table.add_row(vec![Cell::new(kind.label()), count_cell(tables.len(kind))]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(tables.total_records()).add_attribute(Attribute::Bold),
    ]);
    println!("{table}");

    if let Some(stats) = stats {
        println!(
            "Rows scanned: {}  headers: {}  separators: {}  dropped: {}",
            stats.rows, stats.headers, stats.separators, stats.orphans
        );
    }
}

pub fn print_admin_view(rows: &[DenormalizedRow]) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Config"),
        header_cell("Title"),
        header_cell("Partner"),
        header_cell("Status"),
        header_cell("Segment"),
        header_cell("Priority"),
        header_cell("Benefits"),
        header_cell("CTA"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 3, CellAlignment::Center);
    align_column(&mut table, 5, CellAlignment::Right);
    for row in rows {
        table.add_row(vec![
            Cell::new(&row.card.config_id).add_attribute(Attribute::Bold),
            Cell::new(&row.card.title),
            Cell::new(&row.partner_name),
            status_cell(&row.status),
            Cell::new(&row.segment),
            Cell::new(&row.priority),
            Cell::new(row.card.benefits().join("\n")),
            text_or_dash(&row.card.cta_label),
        ]);
    }
    println!("{table}");
}

pub fn print_eligible(engine: &ResolutionEngine<'_>, segment: &str, cards: &[&CardPresentation]) {
    println!("Segment: {segment}");
    if cards.is_empty() {
        println!("No eligible cards.");
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("#"),
        header_cell("Config"),
        header_cell("Title"),
        header_cell("Subtitle"),
        header_cell("Partner"),
        header_cell("Priority"),
        header_cell("Badge"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 5, CellAlignment::Right);
    for (idx, card) in cards.iter().enumerate() {
        let partner = engine
            .partner(&card.partner_id)
            .map_or("-", |partner| partner.name.as_str());
        table.add_row(vec![
            dim_cell(idx + 1),
            Cell::new(&card.config_id).add_attribute(Attribute::Bold),
            Cell::new(&card.title),
            text_or_dash(&card.subtitle),
            Cell::new(partner),
            Cell::new(engine.priority_of(card)),
            text_or_dash(&card.badge_text),
        ]);
    }
    println!("{table}");
}

pub fn print_preview(preview: &CardPreview<'_>) {
    let card = preview.card;
    let mut table = Table::new();
    table.set_header(vec![header_cell("Field"), header_cell("Value")]);
    apply_table_style(&mut table);

    let partner = preview
        .partner
        .map_or_else(|| "Unknown".to_string(), |p| format!("{} ({})", p.name, p.status));
    let mut rows: Vec<(&str, Cell)> = vec![
        (
            "Config",
            Cell::new(&card.config_id).add_attribute(Attribute::Bold),
        ),
        ("Partner", Cell::new(partner)),
        ("Title", Cell::new(&card.title)),
        ("Subtitle", text_or_dash(&card.subtitle)),
        ("Badge", text_or_dash(&card.badge_text)),
        (
            "Colors",
            Cell::new(format!(
                "{} / {}",
                or_dash(&card.bg_color),
                or_dash(&card.text_color)
            )),
        ),
        ("Benefits", Cell::new(preview.benefits.join("\n"))),
        ("CTA", text_or_dash(&card.cta_label)),
        ("Priority", Cell::new(preview.priority)),
    ];
    let segments: Vec<&str> = preview.rules.iter().map(|r| r.segment.as_str()).collect();
    rows.push(if segments.is_empty() {
        ("Segments", dim_cell("(no rules: everyone)"))
    } else {
        ("Segments", Cell::new(segments.join(", ")))
    });
    match preview.detail {
        Some(detail) => {
            rows.push(("Hero banner", text_or_dash(&detail.hero_banner_url)));
            rows.push(("Steps", Cell::new(detail.steps().join("\n"))));
            rows.push(("Terms", text_or_dash(&detail.terms)));
            rows.push(("Action", text_or_dash(&detail.cta_action_type)));
            rows.push(("Final URL", text_or_dash(&detail.final_url)));
        }
        None => rows.push(("Detail", dim_cell("(no product detail)"))),
    }
    for (label, value) in rows {
        table.add_row(vec![Cell::new(label).fg(Color::Cyan), value]);
    }
    println!("{table}");
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .add_attribute(Attribute::Bold)
        .fg(Color::Cyan)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value.to_string()).fg(Color::DarkGrey)
}

fn count_cell(count: usize) -> Cell {
    if count > 0 {
        Cell::new(count)
    } else {
        dim_cell(count)
    }
}

fn status_cell(status: &str) -> Cell {
    if status.eq_ignore_ascii_case("active") {
        Cell::new(status).fg(Color::Green)
    } else {
        Cell::new(status).fg(Color::Red)
    }
}

fn or_dash(value: &str) -> &str {
    if value.is_empty() { "-" } else { value }
}

fn text_or_dash(value: &str) -> Cell {
    if value.is_empty() {
        dim_cell("-")
    } else {
        Cell::new(value)
    }
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(140);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(80);
}
