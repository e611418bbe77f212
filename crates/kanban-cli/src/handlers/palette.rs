use crate::output;
use kanban_domain::LabelColor;

pub fn handle() -> anyhow::Result<()> {
    let colors: Vec<&str> = LabelColor::ALL.iter().map(|c| c.as_str()).collect();
    output::output_list(colors)
}
