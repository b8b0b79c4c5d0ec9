//! Interface labels and page copy.

use crate::i18n::{Language, LocalizedText};

/// Every fixed piece of interface text on the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Label {
    // Navigation
    /// Link to the about section
    NavAbout,
    /// Link to the philosophy section
    NavPhilosophy,
    /// Link to the pricing page
    NavPricing,
    /// Link to the profile page
    NavProfile,
    /// Header call-to-action
    Begin,
    /// Accessible name of the mobile menu button
    MenuToggle,
    /// Accessible name of the dark-mode button
    DarkModeToggle,
    /// Accessible name of the language switcher
    LanguageSwitcher,
    /// Accessible name of the main navigation
    MainNavigation,

    // Footer
    /// Suffix of the copyright line
    AllRightsReserved,
    /// Install affordance in the footer
    AddToHomeScreen,

    // Home page
    /// Hero heading
    HeroTitle,
    /// Hero lead paragraph
    HeroLead,
    /// About section heading
    AboutHeading,
    /// About section body
    AboutBody,
    /// Philosophy section heading
    PhilosophyHeading,
    /// Philosophy section body
    PhilosophyBody,
    /// Heading above the room cards
    RoomsHeading,

    // Check-in
    /// Check-in page heading
    CheckInHeading,
    /// Prompt above the weather picker
    WeatherPrompt,
    /// Shown after a mood has been chosen
    WeatherChosen,

    // Illustration
    /// Accessible title of the illustration
    IllustrationTitle,
    /// Caption under the illustration
    IllustrationCaption,

    // Secondary pages
    /// Install page heading
    InstallHeading,
    /// Install page body
    InstallBody,
    /// Pricing page heading
    PricingHeading,
    /// Pricing page body
    PricingBody,
    /// Profile page heading
    ProfileHeading,
    /// Profile page body
    ProfileBody,
    /// Heading above a room's keyword chips
    RoomTagsHeading,
    /// Not-found page heading
    NotFoundHeading,
    /// Not-found page body
    NotFoundBody,
    /// Link back to the landing page
    BackHome,
}

impl Label {
    /// Returns every label in declaration order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::NavAbout,
            Self::NavPhilosophy,
            Self::NavPricing,
            Self::NavProfile,
            Self::Begin,
            Self::MenuToggle,
            Self::DarkModeToggle,
            Self::LanguageSwitcher,
            Self::MainNavigation,
            Self::AllRightsReserved,
            Self::AddToHomeScreen,
            Self::HeroTitle,
            Self::HeroLead,
            Self::AboutHeading,
            Self::AboutBody,
            Self::PhilosophyHeading,
            Self::PhilosophyBody,
            Self::RoomsHeading,
            Self::CheckInHeading,
            Self::WeatherPrompt,
            Self::WeatherChosen,
            Self::IllustrationTitle,
            Self::IllustrationCaption,
            Self::InstallHeading,
            Self::InstallBody,
            Self::PricingHeading,
            Self::PricingBody,
            Self::ProfileHeading,
            Self::ProfileBody,
            Self::RoomTagsHeading,
            Self::NotFoundHeading,
            Self::NotFoundBody,
            Self::BackHome,
        ]
    }

    /// Both language forms of this label.
    #[must_use]
    pub const fn localized(self) -> LocalizedText {
        match self {
            Self::NavAbout => LocalizedText::new("About", "について"),
            Self::NavPhilosophy => LocalizedText::new("Philosophy", "考え方"),
            Self::NavPricing => LocalizedText::new("Pricing", "料金"),
            Self::NavProfile => LocalizedText::new("My page", "マイページ"),
            Self::Begin => LocalizedText::new("Begin", "始める"),
            Self::MenuToggle => LocalizedText::new("Open menu", "メニューを開く"),
            Self::DarkModeToggle => LocalizedText::new("Toggle dark mode", "ダークモード切替"),
            Self::LanguageSwitcher => LocalizedText::new("Language", "言語"),
            Self::MainNavigation => LocalizedText::new("Main navigation", "メインナビゲーション"),

            Self::AllRightsReserved => LocalizedText::new("All rights reserved.", "無断転載を禁じます。"),
            Self::AddToHomeScreen => LocalizedText::new("Add to Home Screen", "ホーム画面に追加"),

            Self::HeroTitle => LocalizedText::new(
                "A quiet place for a restless mind",
                "落ち着かない心のための、静かな場所",
            ),
            Self::HeroLead => LocalizedText::new(
                "Check in with your inner weather, then step into a room made for how you feel.",
                "今日の心のお天気を確かめて、いまの気分に合う部屋へどうぞ。",
            ),
            Self::AboutHeading => LocalizedText::new("About", "このサイトについて"),
            Self::AboutBody => LocalizedText::new(
                "Komorebi brings ideas from Japanese psychotherapy into small daily practices you can do in a few minutes.",
                "こもれびは、日本で生まれた心理療法の考え方を、数分でできる日々の習慣にしてお届けします。",
            ),
            Self::PhilosophyHeading => LocalizedText::new("Philosophy", "考え方"),
            Self::PhilosophyBody => LocalizedText::new(
                "Feelings are not problems to fix. Accept them as they are and do what matters.",
                "感情は直すべき問題ではありません。あるがままに受け入れ、なすべきことをなす。",
            ),
            Self::RoomsHeading => LocalizedText::new("Choose a room", "部屋を選ぶ"),

            Self::CheckInHeading => LocalizedText::new("Daily check-in", "今日のチェックイン"),
            Self::WeatherPrompt => LocalizedText::new(
                "How is your inner weather today?",
                "今日の心のお天気は？",
            ),
            Self::WeatherChosen => LocalizedText::new(
                "Thank you. Pick a room when you are ready.",
                "ありがとうございます。準備ができたら部屋を選んでください。",
            ),

            Self::IllustrationTitle => LocalizedText::new(
                "Sunlight through leaves over a stone garden",
                "石庭に差し込む木漏れ日",
            ),
            Self::IllustrationCaption => LocalizedText::new(
                "Light filters through the leaves, whatever the weather.",
                "どんな天気の日にも、木漏れ日は差し込みます。",
            ),

            Self::InstallHeading => LocalizedText::new("Add to Home Screen", "ホーム画面に追加"),
            Self::InstallBody => LocalizedText::new(
                "Open the share menu of your browser and choose \"Add to Home Screen\" to keep Komorebi one tap away.",
                "ブラウザの共有メニューから「ホーム画面に追加」を選ぶと、ワンタップでこもれびを開けます。",
            ),
            Self::PricingHeading => LocalizedText::new("Pricing", "料金"),
            Self::PricingBody => LocalizedText::new(
                "The daily check-in and all three rooms are free. Guided programs are available with a membership.",
                "毎日のチェックインと三つの部屋は無料です。ガイド付きプログラムはメンバーシップでご利用いただけます。",
            ),
            Self::ProfileHeading => LocalizedText::new("My page", "マイページ"),
            Self::ProfileBody => LocalizedText::new(
                "Your check-in history appears here after you sign in.",
                "ログインすると、チェックインの履歴がここに表示されます。",
            ),
            Self::RoomTagsHeading => LocalizedText::new("Keywords", "キーワード"),
            Self::NotFoundHeading => LocalizedText::new("Page not found", "ページが見つかりません"),
            Self::NotFoundBody => LocalizedText::new(
                "The page you are looking for does not exist.",
                "お探しのページは存在しません。",
            ),
            Self::BackHome => LocalizedText::new("Back to home", "ホームに戻る"),
        }
    }

    /// Text of this label in `lang`.
    #[must_use]
    pub const fn text(self, lang: Language) -> &'static str {
        self.localized().pick(lang)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Position in declaration order; the match fails to compile when a
    /// variant is added without an index.
    const fn ordinal(label: Label) -> usize {
        match label {
            Label::NavAbout => 0,
            Label::NavPhilosophy => 1,
            Label::NavPricing => 2,
            Label::NavProfile => 3,
            Label::Begin => 4,
            Label::MenuToggle => 5,
            Label::DarkModeToggle => 6,
            Label::LanguageSwitcher => 7,
            Label::MainNavigation => 8,
            Label::AllRightsReserved => 9,
            Label::AddToHomeScreen => 10,
            Label::HeroTitle => 11,
            Label::HeroLead => 12,
            Label::AboutHeading => 13,
            Label::AboutBody => 14,
            Label::PhilosophyHeading => 15,
            Label::PhilosophyBody => 16,
            Label::RoomsHeading => 17,
            Label::CheckInHeading => 18,
            Label::WeatherPrompt => 19,
            Label::WeatherChosen => 20,
            Label::IllustrationTitle => 21,
            Label::IllustrationCaption => 22,
            Label::InstallHeading => 23,
            Label::InstallBody => 24,
            Label::PricingHeading => 25,
            Label::PricingBody => 26,
            Label::ProfileHeading => 27,
            Label::ProfileBody => 28,
            Label::RoomTagsHeading => 29,
            Label::NotFoundHeading => 30,
            Label::NotFoundBody => 31,
            Label::BackHome => 32,
        }
    }

    #[test]
    fn test_all_lists_every_variant_once() {
        let all = Label::all();
        assert_eq!(all.len(), ordinal(Label::BackHome) + 1);
        for (i, &label) in all.iter().enumerate() {
            assert_eq!(ordinal(label), i, "{label:?}");
        }
    }

    #[test]
    fn test_every_label_non_empty() {
        for &label in Label::all() {
            for &lang in Language::all() {
                assert!(!label.text(lang).is_empty(), "{label:?} in {lang}");
            }
        }
    }

    #[test]
    fn test_begin_label() {
        assert_eq!(Label::Begin.text(Language::En), "Begin");
        assert_eq!(Label::Begin.text(Language::Ja), "始める");
    }
}
