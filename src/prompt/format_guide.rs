//! Native text-rendering guides per creative format.
//!
//! Each guide is a fixed block pasted into the image-director prompt so the
//! model renders the overlay the way the real platform UI would. Formats
//! without a dedicated entry share [`DEFAULT_FORMAT_GUIDE`].

use crate::creative::CreativeFormat;

/// Guide used for formats without a dedicated entry and for unknown labels.
pub const DEFAULT_FORMAT_GUIDE: &str = "TEXT RENDERING INSTRUCTION:
STYLE: Natural Text Overlay.
COPY STYLE: Short, readable headline.
LAYOUT: Integrated.
IDENTITY RULE: Observer/Expert.";

/// Style and copy guide for one format. Never empty.
pub fn format_text_guide(format: CreativeFormat) -> &'static str {
    match format {
        // ── Native social UI ────────────────────────────────────────
        CreativeFormat::IgStoryText | CreativeFormat::LongText => {
            "TEXT RENDERING INSTRUCTION:
STYLE: Instagram Story \"Wall of Text\" Overlay.
COPY STYLE: Long-form narrative (3-4 short sentences). Always end with a call to action.
FONT: San Francisco (iOS) or Typewriter, small/medium size, on a text background so it stays readable. Highlighter-style emphasis on the hook line that makes people read to the end.
LAYOUT: Center-aligned or Left-aligned block text.
BACKGROUND: Match the photo background.
IDENTITY RULE: Follow the specific \"Voice Archetype\" defined in the prompt (Authority/Skeptic/Etc)."
        }
        CreativeFormat::StoryPoll => {
            "TEXT RENDERING INSTRUCTION:
STYLE: Direct Instagram Story Screenshot with Poll Sticker.
COPY STYLE: Question must be engaging/provocative. Options should be binary (Yes/No, This/That).
ELEMENTS: The Poll Question + Two Option Buttons.
IDENTITY RULE: Question: Ask the AUDIENCE. Options: Audience Responses."
        }
        CreativeFormat::StoryQna => {
            "TEXT RENDERING INSTRUCTION:
STYLE: Direct Instagram Q&A Sticker Response (Flat UI).
COPY STYLE: Question is a user complaint/worry. Answer is empathetic solution.
LAYOUT: White \"Question Box\" above Answer Text.
IDENTITY RULE: Question Box: CLIENT complaining. Answer Text: BRAND answering."
        }
        CreativeFormat::PhoneNotes => {
            "TEXT RENDERING INSTRUCTION:
STYLE: Direct Screenshot of Apple Notes App.
COPY STYLE: Stream of consciousness, raw, vulnerable, diary-entry style.
SURFACE: Textured yellowish paper digital background.
HEADER: \"Today at 9:41 AM\".
DYNAMIC: The text cursor \"|\" should be visible.
IDENTITY RULE: TITLE: \"Journal\" or \"Thoughts\". BODY: Raw emotion."
        }
        CreativeFormat::TwitterRepost => {
            "TEXT RENDERING INSTRUCTION:
STYLE: Direct Screenshot of X (Twitter) Post - DARK MODE.
COPY STYLE: Internet slang, lowercase, abbreviations (rn, lol, smh), punchy.
BACKGROUND: Pure Hex Black background (#000000).
ELEMENTS: Profile Pic, Name, Handle (@user_123), Text, Stats.
NO: No hand, no phone bezel. Just the UI."
        }
        CreativeFormat::HandheldTweet => {
            "TEXT RENDERING INSTRUCTION:
STYLE: Photograph of a hand holding a phone showing a Tweet.
COPY STYLE: Slang, punchy.
BACKGROUND: Blurred lifestyle background.
FOCUS: The screen is the hero."
        }
        CreativeFormat::GmailUx => {
            "TEXT RENDERING INSTRUCTION:
STYLE: Direct Screenshot of Gmail Mobile Inbox List.
COPY STYLE: Subject line cut off (ellipsis...), sender name clear. Urgent or curiosity-inducing.
ELEMENTS: Sender Name (Bold), Subject (Bold), Preview Text (Grey).
IDENTITY RULE: Sender MUST be the Source of Pain or Authority."
        }
        CreativeFormat::DmNotification | CreativeFormat::ReminderNotif => {
            "TEXT RENDERING INSTRUCTION:
STYLE: Direct Screenshot of iOS Lockscreen Notification Stack.
COPY STYLE: Short, urgent, intimate. \"Missed call\", \"Don't forget\", \"Hey...\".
SURFACE: Glassmorphism blur effect over a wallpaper.
NO: No phone hardware visible. Just the screen UI.
IDENTITY RULE: SENDER: \"Him\", \"Her\", \"Crush\", or \"Reminder\"."
        }
        CreativeFormat::ChatConversation => {
            "TEXT RENDERING INSTRUCTION:
STYLE: Direct Screenshot of WhatsApp or iMessage.
COPY STYLE: Conversational, short bursts. \"P\" \"Where are you?\"
LAYOUT: Left (Incoming) vs Right (Outgoing).
IDENTITY RULE: The complaint ALWAYS comes from the Left."
        }
        CreativeFormat::SearchBar => {
            "TEXT RENDERING INSTRUCTION:
STYLE: Direct Screenshot of Google Mobile Search Page.
COPY STYLE: Query syntax. \"how to fix...\", \"why is my...\", \"best cure for...\".
ELEMENTS: Search pill with text + Magnifying glass icon.
IDENTITY RULE: The text represents the User's secret anxiety."
        }
        CreativeFormat::RedditThread => {
            "TEXT RENDERING INSTRUCTION:
STYLE: Direct Screenshot of Reddit Post - Dark Mode.
COPY STYLE: Forum title style. \"AITA for...\", \"TIFU by...\", \"Does anyone else...\".
ELEMENTS: Subreddit name (r/...), Upvote arrow, Title.
IDENTITY RULE: User is anonymous. Brand is NOT the OP."
        }
        CreativeFormat::SocialCommentStack => {
            "TEXT RENDERING INSTRUCTION:
STYLE: Direct Screenshot of Instagram/TikTok Comments Section.
COPY STYLE: Internet comment slang. \"Real.\", \"This.\", \"Omg same\".
ELEMENTS: Stack of 3-4 comments.
IDENTITY RULE: Netizens validating the problem."
        }
        CreativeFormat::ReelsThumbnail => {
            "TEXT RENDERING INSTRUCTION:
STYLE: Instagram Reels Cover (9:16) Screenshot.
COPY STYLE: Clickbait Hook. \"Stop doing this\", \"3 Reasons why\", \"Watch till end\".
TEXT: Big, Bold Hook Text.
IDENTITY RULE: Visual matches the hook intensity."
        }

        // ── Visual & creator ────────────────────────────────────────
        CreativeFormat::UgcMirror => {
            "TEXT RENDERING INSTRUCTION:
STYLE: Mirror Selfie Photograph.
COPY STYLE: Text bubble overlay. Casual observation. \"Outfit of the day\", \"Gym progress\".
SUBJECT: Gen-Z/Millennial creator holding a smartphone.
IDENTITY RULE: Must look like a customer review."
        }
        CreativeFormat::EducationalRant => {
            "TEXT RENDERING INSTRUCTION:
STYLE: Talking Head Video Screenshot (Green Screen).
COPY STYLE: Educational hook/headline overlay. \"The Truth About X\".
BACKGROUND: Relevant article/photo.
IDENTITY RULE: Caption is a \"Truth Bomb\"."
        }
        CreativeFormat::Whiteboard => {
            "TEXT RENDERING INSTRUCTION:
STYLE: Hand-drawn diagram on a whiteboard/paper.
COPY STYLE: Handwritten notes, arrows, circles. Simple concepts.
TEXT: Handwriting font (Marker style).
IDENTITY RULE: Teacher/Explainer mode."
        }
        CreativeFormat::Meme => {
            "TEXT RENDERING INSTRUCTION:
STYLE: Modern Meme (Twitter screenshot or Top Text).
COPY STYLE: Relatable situation. \"Me when...\", \"Nobody: ...\".
FONT: Standard Sans-serif or Impact.
IDENTITY RULE: Audience perspective."
        }
        CreativeFormat::CollageScrapbook => {
            "TEXT RENDERING INSTRUCTION:
STYLE: Digital Scrapbook / Moodboard.
COPY STYLE: Handwritten labels, dates, \"Mood\", \"Vibe\".
ELEMENTS: Ripped paper, tape.
IDENTITY RULE: Aesthetic/Vision board."
        }

        // ── Pattern interrupt & ugly ads ────────────────────────────
        CreativeFormat::UglyVisual | CreativeFormat::MsPaint => {
            "TEXT RENDERING INSTRUCTION:
STYLE: MS Paint Scribble / Bad Graphic Design.
COPY STYLE: Crude, ironic, simple. \"Graphic design is my passion\" energy.
BACKGROUND: Plain white canvas.
FONT: Comic Sans, Arial.
VIBE: Ironic, stands out."
        }
        CreativeFormat::StickyNoteRealism => {
            "TEXT RENDERING INSTRUCTION:
STYLE: Real Post-it note Photograph.
COPY STYLE: Handwritten reminder. Short, punchy. \"Drink water\", \"Call mom\".
FONT: Messy Handwriting.
IDENTITY RULE: Personal reminder."
        }
        CreativeFormat::BigFont | CreativeFormat::Billboard => {
            "TEXT RENDERING INSTRUCTION:
STYLE: Kinetic Typography / Poster.
COPY STYLE: 3-5 Words Max. Loud. Shocking.
BACKGROUND: Solid color.
FONT: HUGE Impact/Helvetica.
IDENTITY RULE: Loud Announcement."
        }

        // ── Data, logic & conversion ────────────────────────────────
        CreativeFormat::UsVsThem => {
            "TEXT RENDERING INSTRUCTION:
STYLE: Digital Comparison Chart (Infographic).
COPY STYLE: \"Us\" vs \"Them\" labels. Feature list.
ICONS: Checkmarks vs Crosses.
IDENTITY RULE: Brand = Winner."
        }
        CreativeFormat::BeforeAfter | CreativeFormat::OldMeVsNewMe => {
            "TEXT RENDERING INSTRUCTION:
STYLE: Split Screen Photo.
COPY STYLE: Time labels. \"Day 1\" vs \"Day 30\". \"Before\" vs \"After\".
VISUAL: Left desaturated, Right bright.
IDENTITY RULE: Transformation proof."
        }
        CreativeFormat::TimelineJourney => {
            "TEXT RENDERING INSTRUCTION:
STYLE: Roadmap / Timeline Infographic.
COPY STYLE: Steps/Milestones. \"Start\", \"Process\", \"Goal\".
POINTS: A -> B -> C.
IDENTITY RULE: The Path."
        }
        CreativeFormat::ChecklistTodo => {
            "TEXT RENDERING INSTRUCTION:
STYLE: Notebook Checklist Photograph.
COPY STYLE: List items. \"Pain 1\", \"Pain 2\".
ELEMENTS: Handwritten checkboxes.
IDENTITY RULE: Symptom checklist."
        }
        CreativeFormat::TestimonialHighlight | CreativeFormat::CarouselTestimonial => {
            "TEXT RENDERING INSTRUCTION:
STYLE: Review Block / Trustpilot Card (Digital UI).
COPY STYLE: Customer quote. \"Best investment ever\", \"Finally relieved\".
ELEMENTS: 5 Gold Stars.
IDENTITY RULE: Social proof."
        }
        CreativeFormat::PressFeature => {
            "TEXT RENDERING INSTRUCTION:
STYLE: News Headline Overlay.
COPY STYLE: Journalistic headline. \"The breakthrough of the year\".
LOGO: Generic \"News\" logo.
IDENTITY RULE: Authority."
        }
        CreativeFormat::GraphChart | CreativeFormat::VennDiagram => {
            "TEXT RENDERING INSTRUCTION:
STYLE: Chart/Graph Infographic.
COPY STYLE: Data labels. Axis labels. \"Efficiency\", \"Cost\".
IDENTITY RULE: Logic and Facts."
        }

        // ── Video & VSL scenes ──────────────────────────────────────
        CreativeFormat::VideoUgcHook => {
            "TEXT RENDERING INSTRUCTION:
STYLE: Cinematic 16:9 or 9:16 Video Still (Opening Frame).
VISUAL: Close-up of a person speaking directly to camera (UGC Style).
EXPRESSION: Shocked, Urgent, or Confessional.
TEXT OVERLAY: Big, bold TikTok-style hook text at the top.
LIGHTING: Ring light or natural window light. Authentic."
        }
        CreativeFormat::VideoProblemSolution => {
            "TEXT RENDERING INSTRUCTION:
STYLE: Cinematic 16:9 Video Still (B-Roll).
VISUAL: Dramatic representation of the problem (e.g., someone holding their back in pain, or a messy room).
VIBE: High contrast, moody, cinematic color grading.
TEXT OVERLAY: Minimal subtitle at bottom."
        }
        CreativeFormat::VideoUnboxingAsmr => {
            "TEXT RENDERING INSTRUCTION:
STYLE: Top-down or POV hands-on shot.
VISUAL: Hands opening the product packaging on a clean aesthetic surface.
FOCUS: Texture, packaging details, satisfaction.
LIGHTING: Soft, bright, high-key."
        }

        CreativeFormat::ProductLifestyle | CreativeFormat::VslSceneCut => DEFAULT_FORMAT_GUIDE,
    }
}

/// Guide for a raw format label; unknown labels get [`DEFAULT_FORMAT_GUIDE`].
pub fn format_text_guide_for_label(label: &str) -> &'static str {
    label
        .parse::<CreativeFormat>()
        .map(format_text_guide)
        .unwrap_or(DEFAULT_FORMAT_GUIDE)
}
