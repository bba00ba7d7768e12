//! Copy and media for every page. Plain data; the frontend maps it onto components.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Backdrop {
    /// loaded only once the splash scrolls into view
    Video {
        url: &'static str,
        mime_type: &'static str,
    },
    Image {
        url: &'static str,
        alt: &'static str,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SplashContent {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub backdrop: Backdrop,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CardContent {
    pub title: &'static str,
    pub text: &'static str,
    pub image: &'static str,
    pub alt: &'static str,
    /// parse `[href](label)` markup in `text`
    pub allow_links: bool,
    pub footer: Option<&'static str>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InfoBlockContent {
    pub title: &'static str,
    pub text: &'static str,
    pub button_path: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HomePage {
    pub splash: SplashContent,
    pub cards: [CardContent; 3],
    pub info_blocks: [InfoBlockContent; 3],
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HistoryPage {
    pub splash: SplashContent,
    pub robots: [CardContent; 3],
}

pub const HOME: HomePage = HomePage {
    splash: SplashContent {
        title: "TEAM 2976",
        subtitle: "THE SPARTABOTS",
        backdrop: Backdrop::Video {
            url: "https://res.cloudinary.com/spartasite/video/upload/v1715152061/BRoll.mp4",
            mime_type: "video/mp4",
        },
    },
    cards: [
        CardContent {
            title: "ABOUT US",
            text: "The Spartabots were founded in 2008 at Skyline High School located in Sammamish, WA. We participate in the FIRST Robotics Competition as Team 2976, we operate as a high school club.",
            image: "https://res.cloudinary.com/spartasite/image/upload/v1715152621/yanda.jpg",
            alt: "Group photo of the Spartabots team",
            allow_links: false,
            footer: None,
        },
        CardContent {
            title: "WHAT IS FIRST ROBOTICS?",
            text: "FRC stands for the FIRST Robotics Competition, which is an international high school robotics competition operated by FIRST (For Inspiration and Recognition of Science and Technology). The game of the competition changes each year to keep the excitement fresh and keep teams innovating. The game for 2025 is called [https://info.firstinspires.org/first-dive?wvideo=crwl1zigkv](REEFSCAPE).",
            image: "https://res.cloudinary.com/spartasite/image/upload/v1715152613/CRESENDO%20Game.jpg",
            alt: "Wide shot of the FIRST Robotics Competition",
            allow_links: true,
            footer: None,
        },
        CardContent {
            title: "WHY SHOULD I JOIN?",
            text: "Being part of a FIRST robotics team is fun! It doesn't matter whether you have experience with robotics or not, you'll gain amazing experiences and learn valuable skills that you can carry to college and beyond.",
            image: "https://res.cloudinary.com/spartasite/image/upload/v1715152604/Artemis%20In%20Game.webp",
            alt: "Picture of the CHRONOS bot",
            allow_links: false,
            footer: None,
        },
    ],
    info_blocks: [
        InfoBlockContent {
            title: "Our Sponsors",
            text: "The Spartabots wouldn't exist without the support of our gracious sponsors, who help us in a variety of ways from granting money to donating parts.",
            button_path: "/sponsors",
        },
        InfoBlockContent {
            title: "Community",
            text: "Our goal is to raise awareness and interest among the people of our community, about our club as well as the field of science and technology. Partnering with community members and local companies will allow us to raise sufficient funds to support our club mission and objectives.",
            button_path: "/about",
        },
        InfoBlockContent {
            title: "Get Involved",
            text: "We are always looking for any help within the club. Whether it be new students to join us, new mentors, or new sponsors to support our team.",
            button_path: "/join",
        },
    ],
};

pub const HISTORY: HistoryPage = HistoryPage {
    splash: SplashContent {
        title: "HISTORY",
        subtitle: "2009 — 2024",
        backdrop: Backdrop::Image {
            url: "https://res.cloudinary.com/spartasite/image/upload/v1715152615/tuffbot.webp",
            alt: "One of the early Spartabots robots",
        },
    },
    robots: [
        CardContent {
            title: "2022 — Chronos",
            text: "Chronos was Spartabots 2022 competition robot for the FIRST challenge RAPID REACT, this robot made it to World's in the Hopper divison as a Semi-Finalist.",
            image: "https://res.cloudinary.com/spartasite/image/upload/v1715152596/Chronos.webp",
            alt: "2022 FRC robot named chronos",
            allow_links: false,
            footer: Some("Status: Decommissioned"),
        },
        CardContent {
            title: "2023 — Zeus",
            text: "Zeus was The Spartabot's 2023 robot for the FIRST FRC Challenge CHARGED UP, this robot was apart of Alliance 5 at Sammamish and Alliance 6 at Glacier Peak!",
            image: "https://res.cloudinary.com/spartasite/image/upload/v1715152617/Zeus.png",
            alt: "2023 FRC robot named zeus",
            allow_links: false,
            footer: Some("Status: Decommissioned"),
        },
        CardContent {
            title: "2024 — Artemis",
            text: "Artemis is Spartabot's current robot for the FIRST Challenge CRESENDO, this robot was an Event Finalist at Auburn and a Semi-Finalist at Sammamish!",
            image: "https://res.cloudinary.com/spartasite/image/upload/v1715152613/Artemis.jpg",
            alt: "2024 FRC robot named artemis",
            allow_links: false,
            footer: Some("Status: In Use"),
        },
    ],
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rich_text::{self, Segment};

    #[test]
    fn home_splash_defers_a_video() {
        assert!(matches!(
            HOME.splash.backdrop,
            Backdrop::Video {
                mime_type: "video/mp4",
                ..
            }
        ));
    }

    #[test]
    fn only_linked_cards_contain_markup() {
        let cards = HOME.cards.iter().chain(HISTORY.robots.iter());

        for card in cards {
            let has_link = rich_text::parse(card.text)
                .iter()
                .any(|segment| matches!(segment, Segment::Link { .. }));

            assert_eq!(has_link, card.allow_links, "{}", card.title);
        }
    }

    #[test]
    fn info_blocks_link_inside_the_site() {
        for block in HOME.info_blocks {
            assert!(block.button_path.starts_with('/'), "{}", block.title);
        }
    }
}
