//! Interactive component selection

use inquire::MultiSelect;

use crate::error::Result;

/// Select components interactively from the installable catalog
pub fn select_components(installable: &[String]) -> Result<Vec<String>> {
    if installable.is_empty() {
        return Ok(vec![]);
    }

    println!();

    let selection = match MultiSelect::new("Select components to add", installable.to_vec())
        .with_page_size(10)
        .with_help_message(
            "  ↑↓ navigate  space select  enter confirm  type to filter  q/esc cancel",
        )
        .prompt_skippable()?
    {
        Some(sel) => sel,
        None => return Ok(vec![]),
    };

    Ok(selection)
}
