use iced::{
    widget::{button, column, row, text, Space},
    Element, Length,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavItem {
    Home,
    About,
    Contact,
}

impl NavItem {
    pub const ALL: [NavItem; 3] = [NavItem::Home, NavItem::About, NavItem::Contact];

    pub fn label(self) -> &'static str {
        match self {
            NavItem::Home => "Home",
            NavItem::About => "About",
            NavItem::Contact => "Contact",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub enum NavbarMessage {
    MenuToggled,
    ItemSelected(NavItem),
}

/// Top navigation chrome. Purely presentational: it never talks to the
/// download form.
#[derive(Default)]
pub struct Navbar {
    menu_open: bool,
}

impl Navbar {
    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn update(&mut self, message: NavbarMessage) {
        match message {
            NavbarMessage::MenuToggled => {
                self.menu_open = !self.menu_open;
            }
            NavbarMessage::ItemSelected(_) => {
                // Selecting an item only dismisses the menu.
                self.menu_open = false;
            }
        }
    }

    pub fn view(&self) -> Element<'_, NavbarMessage> {
        let header = row![
            text("YouTube MP3 Downloader").size(20),
            Space::new().width(Length::Fill),
            button(text(if self.menu_open { "Close" } else { "Menu" }).size(14))
                .on_press(NavbarMessage::MenuToggled)
                .padding([6, 12]),
        ]
        .padding(10);

        let mut bar = column![header];

        if self.is_menu_open() {
            let mut items = column![].spacing(4);
            for item in NavItem::ALL {
                items = items.push(
                    button(text(item.label()).size(14))
                        .style(button::text)
                        .on_press(NavbarMessage::ItemSelected(item)),
                );
            }
            bar = bar.push(items.padding([0, 10]));
        }

        bar.into()
    }
}
