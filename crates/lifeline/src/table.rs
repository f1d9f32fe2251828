use lifeline_core::Game;

/// Box-drawn life total table for the `status` command.
pub struct TableFormatter {
    slot_width: usize,
    name_width: usize,
    total_width: usize,
}

impl TableFormatter {
    pub fn new(game: &Game) -> Self {
        let name_width = game
            .players()
            .iter()
            .map(|(_, player)| player.name.chars().count())
            .max()
            .unwrap_or(8)
            .clamp(4, 30); // Between "Name" header min and reasonable terminal width max

        let total_width = game
            .players()
            .iter()
            .map(|(_, player)| player.total.to_string().len())
            .max()
            .unwrap_or(5)
            .max(5);

        Self {
            slot_width: 6,
            name_width,
            total_width,
        }
    }

    pub fn render(&self, game: &Game) -> String {
        let mut lines = vec![self.top_border(), self.header_row(), self.separator()];
        for (slot, player) in game.players() {
            lines.push(format!(
                "│ {:<width_slot$} │ {} │ {:>width_total$} │",
                slot.to_string(),
                truncate(&player.name, self.name_width),
                player.total,
                width_slot = self.slot_width,
                width_total = self.total_width,
            ));
        }
        lines.push(self.bottom_border());
        lines.join("\n")
    }

    fn header_row(&self) -> String {
        format!(
            "│ {:<width_slot$} │ {:<width_name$} │ {:>width_total$} │",
            "Player",
            "Name",
            "Total",
            width_slot = self.slot_width,
            width_name = self.name_width,
            width_total = self.total_width,
        )
    }

    fn border(&self, left: &str, mid: &str, right: &str) -> String {
        format!(
            "{left}{}{mid}{}{mid}{}{right}",
            "─".repeat(self.slot_width + 2),
            "─".repeat(self.name_width + 2),
            "─".repeat(self.total_width + 2),
        )
    }

    fn top_border(&self) -> String {
        self.border("┌", "┬", "┐")
    }

    fn separator(&self) -> String {
        self.border("├", "┼", "┤")
    }

    fn bottom_border(&self) -> String {
        self.border("└", "┴", "┘")
    }
}

/// Truncate a string to a maximum display width, adding "..." if truncated.
///
/// Uses character count (not byte count) so multi-byte names are cut safely.
pub fn truncate(s: &str, max_len: usize) -> String {
    let char_count = s.chars().count();
    if char_count <= max_len {
        format!("{:<width$}", s, width = max_len)
    } else {
        let truncated: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{:<width$}", format!("{}...", truncated), width = max_len)
    }
}
