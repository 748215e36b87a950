//! Creative format catalog.
//!
//! [`CreativeFormat`] is the closed set of visual/textual layouts a marketer
//! can request. The display label doubles as the lookup key sent to the
//! model, so labels are stable and routing rules (storyboard vs. single
//! image) are expressed against them.

use std::fmt;
use std::str::FromStr;

/// A creative layout requested for one ad variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CreativeFormat {
    /// Instagram story with a text overlay.
    IgStoryText,
    /// Long-form "wall of text" overlay.
    LongText,
    /// Instagram story poll sticker.
    StoryPoll,
    /// Instagram Q&A sticker response.
    StoryQna,
    /// Apple Notes screenshot.
    PhoneNotes,
    /// X (Twitter) post screenshot.
    TwitterRepost,
    /// Photo of a hand holding a phone showing a tweet.
    HandheldTweet,
    /// Gmail mobile inbox screenshot.
    GmailUx,
    /// Lockscreen DM notification.
    DmNotification,
    /// Lockscreen reminder notification.
    ReminderNotif,
    /// WhatsApp / iMessage conversation.
    ChatConversation,
    /// Google mobile search bar.
    SearchBar,
    /// Reddit thread screenshot.
    RedditThread,
    /// Stack of social comments.
    SocialCommentStack,
    /// Reels cover frame.
    ReelsThumbnail,
    /// Creator mirror selfie.
    UgcMirror,
    /// Green-screen talking head rant.
    EducationalRant,
    /// Hand-drawn whiteboard diagram.
    Whiteboard,
    /// Modern meme.
    Meme,
    /// Digital scrapbook / moodboard.
    CollageScrapbook,
    /// Deliberately ugly graphic.
    UglyVisual,
    /// MS Paint scribble.
    MsPaint,
    /// Post-it note photograph.
    StickyNoteRealism,
    /// Kinetic typography poster.
    BigFont,
    /// Billboard-style announcement.
    Billboard,
    /// Comparison chart.
    UsVsThem,
    /// Split-screen before/after.
    BeforeAfter,
    /// Old me vs. new me split.
    OldMeVsNewMe,
    /// Roadmap / timeline infographic.
    TimelineJourney,
    /// Notebook checklist.
    ChecklistTodo,
    /// Single review card.
    TestimonialHighlight,
    /// Review carousel card.
    CarouselTestimonial,
    /// News headline overlay.
    PressFeature,
    /// Chart or graph infographic.
    GraphChart,
    /// Venn diagram infographic.
    VennDiagram,
    /// Product in a lifestyle scene.
    ProductLifestyle,
    /// Opening frame of a UGC hook video.
    VideoUgcHook,
    /// Problem/solution B-roll still.
    VideoProblemSolution,
    /// Unboxing ASMR shot.
    VideoUnboxingAsmr,
    /// Video sales letter scene cut.
    VslSceneCut,
}

impl CreativeFormat {
    /// Every format, in picker order.
    pub const ALL: [CreativeFormat; 40] = [
        Self::IgStoryText,
        Self::LongText,
        Self::StoryPoll,
        Self::StoryQna,
        Self::PhoneNotes,
        Self::TwitterRepost,
        Self::HandheldTweet,
        Self::GmailUx,
        Self::DmNotification,
        Self::ReminderNotif,
        Self::ChatConversation,
        Self::SearchBar,
        Self::RedditThread,
        Self::SocialCommentStack,
        Self::ReelsThumbnail,
        Self::UgcMirror,
        Self::EducationalRant,
        Self::Whiteboard,
        Self::Meme,
        Self::CollageScrapbook,
        Self::UglyVisual,
        Self::MsPaint,
        Self::StickyNoteRealism,
        Self::BigFont,
        Self::Billboard,
        Self::UsVsThem,
        Self::BeforeAfter,
        Self::OldMeVsNewMe,
        Self::TimelineJourney,
        Self::ChecklistTodo,
        Self::TestimonialHighlight,
        Self::CarouselTestimonial,
        Self::PressFeature,
        Self::GraphChart,
        Self::VennDiagram,
        Self::ProductLifestyle,
        Self::VideoUgcHook,
        Self::VideoProblemSolution,
        Self::VideoUnboxingAsmr,
        Self::VslSceneCut,
    ];

    /// Display label, also used verbatim inside prompts.
    pub fn label(self) -> &'static str {
        match self {
            Self::IgStoryText => "IG Story Text Overlay",
            Self::LongText => "Long Text (Wall of Text)",
            Self::StoryPoll => "Story Poll",
            Self::StoryQna => "Story Q&A",
            Self::PhoneNotes => "Phone Notes",
            Self::TwitterRepost => "Twitter Repost",
            Self::HandheldTweet => "Handheld Tweet",
            Self::GmailUx => "Gmail UX",
            Self::DmNotification => "DM Notification",
            Self::ReminderNotif => "Reminder Notification",
            Self::ChatConversation => "Chat Conversation",
            Self::SearchBar => "Search Bar",
            Self::RedditThread => "Reddit Thread",
            Self::SocialCommentStack => "Social Comment Stack",
            Self::ReelsThumbnail => "Reels Thumbnail",
            Self::UgcMirror => "UGC Mirror Selfie",
            Self::EducationalRant => "Educational Rant",
            Self::Whiteboard => "Whiteboard",
            Self::Meme => "Meme",
            Self::CollageScrapbook => "Collage Scrapbook",
            Self::UglyVisual => "Ugly Visual",
            Self::MsPaint => "MS Paint",
            Self::StickyNoteRealism => "Sticky Note Realism",
            Self::BigFont => "Big Font",
            Self::Billboard => "Billboard",
            Self::UsVsThem => "Us vs Them",
            Self::BeforeAfter => "Before & After",
            Self::OldMeVsNewMe => "Old Me vs New Me",
            Self::TimelineJourney => "Timeline Journey",
            Self::ChecklistTodo => "Checklist To-Do",
            Self::TestimonialHighlight => "Testimonial Highlight",
            Self::CarouselTestimonial => "Carousel Testimonial",
            Self::PressFeature => "Press Feature",
            Self::GraphChart => "Graph Chart",
            Self::VennDiagram => "Venn Diagram",
            Self::ProductLifestyle => "Product Lifestyle",
            Self::VideoUgcHook => "Video: UGC Hook",
            Self::VideoProblemSolution => "Video: Problem/Solution",
            Self::VideoUnboxingAsmr => "Video: Unboxing ASMR",
            Self::VslSceneCut => "VSL Scene Cut",
        }
    }

    /// Stable snake_case identifier accepted on the command line.
    pub fn id(self) -> &'static str {
        match self {
            Self::IgStoryText => "ig_story_text",
            Self::LongText => "long_text",
            Self::StoryPoll => "story_poll",
            Self::StoryQna => "story_qna",
            Self::PhoneNotes => "phone_notes",
            Self::TwitterRepost => "twitter_repost",
            Self::HandheldTweet => "handheld_tweet",
            Self::GmailUx => "gmail_ux",
            Self::DmNotification => "dm_notification",
            Self::ReminderNotif => "reminder_notif",
            Self::ChatConversation => "chat_conversation",
            Self::SearchBar => "search_bar",
            Self::RedditThread => "reddit_thread",
            Self::SocialCommentStack => "social_comment_stack",
            Self::ReelsThumbnail => "reels_thumbnail",
            Self::UgcMirror => "ugc_mirror",
            Self::EducationalRant => "educational_rant",
            Self::Whiteboard => "whiteboard",
            Self::Meme => "meme",
            Self::CollageScrapbook => "collage_scrapbook",
            Self::UglyVisual => "ugly_visual",
            Self::MsPaint => "ms_paint",
            Self::StickyNoteRealism => "sticky_note_realism",
            Self::BigFont => "big_font",
            Self::Billboard => "billboard",
            Self::UsVsThem => "us_vs_them",
            Self::BeforeAfter => "before_after",
            Self::OldMeVsNewMe => "old_me_vs_new_me",
            Self::TimelineJourney => "timeline_journey",
            Self::ChecklistTodo => "checklist_todo",
            Self::TestimonialHighlight => "testimonial_highlight",
            Self::CarouselTestimonial => "carousel_testimonial",
            Self::PressFeature => "press_feature",
            Self::GraphChart => "graph_chart",
            Self::VennDiagram => "venn_diagram",
            Self::ProductLifestyle => "product_lifestyle",
            Self::VideoUgcHook => "video_ugc_hook",
            Self::VideoProblemSolution => "video_problem_solution",
            Self::VideoUnboxingAsmr => "video_unboxing_asmr",
            Self::VslSceneCut => "vsl_scene_cut",
        }
    }

    /// Picker group this format is listed under.
    pub fn group(self) -> FormatGroup {
        match self {
            Self::IgStoryText
            | Self::LongText
            | Self::StoryPoll
            | Self::StoryQna
            | Self::PhoneNotes
            | Self::TwitterRepost
            | Self::HandheldTweet
            | Self::GmailUx
            | Self::DmNotification
            | Self::ReminderNotif
            | Self::ChatConversation
            | Self::SearchBar
            | Self::RedditThread
            | Self::SocialCommentStack
            | Self::ReelsThumbnail => FormatGroup::NativeSocialUi,
            Self::UgcMirror
            | Self::EducationalRant
            | Self::Whiteboard
            | Self::Meme
            | Self::CollageScrapbook
            | Self::ProductLifestyle => FormatGroup::VisualCreator,
            Self::UglyVisual
            | Self::MsPaint
            | Self::StickyNoteRealism
            | Self::BigFont
            | Self::Billboard => FormatGroup::PatternInterrupt,
            Self::UsVsThem
            | Self::BeforeAfter
            | Self::OldMeVsNewMe
            | Self::TimelineJourney
            | Self::ChecklistTodo
            | Self::TestimonialHighlight
            | Self::CarouselTestimonial
            | Self::PressFeature
            | Self::GraphChart
            | Self::VennDiagram => FormatGroup::DataConversion,
            Self::VideoUgcHook
            | Self::VideoProblemSolution
            | Self::VideoUnboxingAsmr
            | Self::VslSceneCut => FormatGroup::VideoVsl,
        }
    }

    /// Whether the format routes to the 9-panel storyboard template.
    pub fn is_storyboard(self) -> bool {
        is_storyboard_label(self.label())
    }

    /// Formats whose overlay is a long narrative paragraph.
    pub fn is_long_form(self) -> bool {
        matches!(self, Self::IgStoryText | Self::LongText)
    }

    /// Formats where the copy is the creative and the visual is secondary.
    pub fn is_text_led(self) -> bool {
        matches!(
            self,
            Self::IgStoryText
                | Self::LongText
                | Self::TwitterRepost
                | Self::HandheldTweet
                | Self::RedditThread
                | Self::PhoneNotes
                | Self::GmailUx
                | Self::DmNotification
                | Self::ReminderNotif
                | Self::ChatConversation
                | Self::SocialCommentStack
        )
    }

    /// Formats that must render as a raw screenshot: no camera, hand or device.
    pub fn is_flat_ui(self) -> bool {
        matches!(
            self,
            Self::TwitterRepost
                | Self::GmailUx
                | Self::DmNotification
                | Self::ReminderNotif
                | Self::ChatConversation
                | Self::RedditThread
                | Self::PhoneNotes
                | Self::SearchBar
                | Self::SocialCommentStack
                | Self::UsVsThem
                | Self::StoryPoll
                | Self::StoryQna
                | Self::IgStoryText
                | Self::LongText
        )
    }
}

/// Storyboard routing rule applied to a raw format label.
///
/// Labels mentioning `Video`, `VSL` or `Hook` are video formats.
pub fn is_storyboard_label(label: &str) -> bool {
    label.contains("Video") || label.contains("VSL") || label.contains("Hook")
}

impl fmt::Display for CreativeFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error returned when a string names no known format.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown creative format '{0}'")]
pub struct UnknownFormat(pub String);

impl FromStr for CreativeFormat {
    type Err = UnknownFormat;

    /// Accepts the display label (case-insensitive) or the snake_case id.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|f| f.label().eq_ignore_ascii_case(needle) || f.id() == needle)
            .ok_or_else(|| UnknownFormat(s.to_owned()))
    }
}

// ---------------------------------------------------------------------------
// Picker groups
// ---------------------------------------------------------------------------

/// Category a format is presented under in the format picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormatGroup {
    /// Screenshots of native social and messaging UI.
    NativeSocialUi,
    /// Creator-shot and illustrated visuals.
    VisualCreator,
    /// Lo-fi pattern interrupts ("ugly ads").
    PatternInterrupt,
    /// Data, comparison and proof layouts.
    DataConversion,
    /// Video stills and storyboards.
    VideoVsl,
}

impl FormatGroup {
    /// Every group, in picker order.
    pub const ALL: [FormatGroup; 5] = [
        Self::NativeSocialUi,
        Self::VisualCreator,
        Self::PatternInterrupt,
        Self::DataConversion,
        Self::VideoVsl,
    ];

    /// Heading shown above the group.
    pub fn label(self) -> &'static str {
        match self {
            Self::NativeSocialUi => "Native Social UI",
            Self::VisualCreator => "Visual & Creator",
            Self::PatternInterrupt => "Pattern Interrupt & Ugly Ads",
            Self::DataConversion => "Data, Logic & Conversion",
            Self::VideoVsl => "Video & VSL Scenes",
        }
    }

    /// Formats belonging to this group, in picker order.
    pub fn formats(self) -> Vec<CreativeFormat> {
        CreativeFormat::ALL
            .iter()
            .copied()
            .filter(|f| f.group() == self)
            .collect()
    }
}
