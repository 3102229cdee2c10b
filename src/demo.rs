// Built-in demo page
// Copy used when no page config is given on the command line

use tui_components::Tab;

use crate::config::{PageConfig, PageCopy, TabPanelSection};

pub const DEMO_EYEBROW: &str = "LOREM IPSUM DOLOR SIT AMET";
pub const DEMO_TITLE: &str = "consectetur adipiscing elit";
pub const DEMO_INTRO: &str = "Donec suscipit eu ex faucibus laoreet. Nulla non neque mauris. \
    Quisque molestie aliquam sem eget mattis. Suspendisse vehicula nisl non quam imperdiet \
    fringilla. Sed sodales ante vel lectus vestibulum.";

/// (label, heading, body) for each demo tab
const DEMO_TABS: [(&str, &str, &str); 3] = [
    (
        "Lorem ipsum",
        "Lorem ipsum dolor sit amet",
        "Etiam vel vehicula diam. Morbi ultrices efficitur urna, ut mollis dui sagittis sit amet. \
         Aliquam nec dolor vel erat fringilla tincidunt eu vitae massa. Ut in tincidunt lectus. \
         Aliquam sit amet felis id ipsum condimentum aliquet.",
    ),
    (
        "Quisque at pretium",
        "Empowering others",
        "Quisque at pretium ligula, sed sollicitudin lorem. Donec nec elit elit. Aliquam sit amet \
         consectetur libero. Nam semper lectus sit amet auctor fringilla. In sit amet enim dui. \
         Nunc varius sollicitudin felis id efficitur.",
    ),
    (
        "Nulla facilisi",
        "Nulla facilisi – curabitur egestas elit eget elit.",
        "Donec ullamcorper, augue non laoreet porta, lacus arcu pharetra lorem, ut varius arcu \
         augue at ipsum. Vivamus id finibus ipsum, sit amet feugiat leo.",
    ),
];

pub fn demo_tabs() -> Vec<Tab> {
    DEMO_TABS
        .iter()
        .map(|(label, heading, body)| Tab::new(*label, *heading, *body))
        .collect()
}

/// Demo page; presentation fields are left unset so the compiled UI defaults apply
pub fn demo_page() -> PageConfig {
    PageConfig {
        page: PageCopy {
            eyebrow: DEMO_EYEBROW.to_string(),
            title: DEMO_TITLE.to_string(),
            intro: DEMO_INTRO.to_string(),
        },
        tab_panel: TabPanelSection {
            tabs: demo_tabs(),
            ..TabPanelSection::default()
        },
    }
}
