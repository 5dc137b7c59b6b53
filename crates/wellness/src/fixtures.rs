//! Built-in sample content used to seed the in-memory stores.
//!
//! Timestamps are relative to the instant passed in so that seeded data
//! always looks recent and tests stay deterministic.

use chrono::{DateTime, Duration, NaiveDate, Utc};
use content::{Difficulty, Post, PostCategory, Resource, ResourceCategory, ResourceKind};

use crate::booking::{Counselor, DayAvailability, SessionType};
use crate::community::{Reply, ANONYMOUS_AUTHOR, ANONYMOUS_INITIALS};
use crate::emergency::{ContactType, EmergencyContact, Priority};

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

struct PostSeed {
    id: &'static str,
    title: &'static str,
    content: &'static str,
    author: Option<(&'static str, &'static str)>,
    category: PostCategory,
    tags: &'static [&'static str],
    age: Duration,
    replies: u32,
    hearts: u32,
}

impl PostSeed {
    fn into_post(self, now: DateTime<Utc>) -> Post {
        let (author, initials) = self.author.unwrap_or((ANONYMOUS_AUTHOR, ANONYMOUS_INITIALS));
        Post {
            id: self.id.to_string(),
            title: self.title.to_string(),
            content: self.content.to_string(),
            author: author.to_string(),
            author_initials: initials.to_string(),
            category: self.category,
            tags: strings(self.tags),
            timestamp: now - self.age,
            replies: self.replies,
            hearts: self.hearts,
            is_anonymous: self.author.is_none(),
            is_moderated: true,
        }
    }
}

pub fn posts(now: DateTime<Utc>) -> Vec<Post> {
    [
        PostSeed {
            id: "1",
            title: "Feeling overwhelmed with finals approaching",
            content: "Hey everyone, I'm really struggling with the pressure of upcoming finals. I feel like I'm drowning in assignments and can't seem to catch up. Has anyone else felt this way? How did you manage?",
            author: None,
            category: PostCategory::Support,
            tags: &["finals", "stress", "overwhelmed"],
            age: Duration::hours(2),
            replies: 8,
            hearts: 12,
        },
        PostSeed {
            id: "2",
            title: "Small victory: I asked for help today!",
            content: "I've been struggling with anxiety for months and today I finally reached out to the counseling center. It was scary but I'm proud of myself for taking that first step. To anyone hesitating - you're worth the help!",
            author: Some(("Sarah M.", "SM")),
            category: PostCategory::Success,
            tags: &["anxiety", "counseling", "victory"],
            age: Duration::hours(5),
            replies: 15,
            hearts: 28,
        },
        PostSeed {
            id: "3",
            title: "Tips for better sleep during stressful times?",
            content: "My sleep schedule has been completely messed up since midterms started. I lie awake thinking about everything I need to do. Any practical tips that have worked for you?",
            author: None,
            category: PostCategory::Advice,
            tags: &["sleep", "stress", "tips"],
            age: Duration::hours(8),
            replies: 6,
            hearts: 9,
        },
        PostSeed {
            id: "4",
            title: "How do you deal with homesickness?",
            content: "I'm a freshman and really missing home lately. It's affecting my mood and motivation. I know this is normal but it still feels really hard. What helped you adjust?",
            author: Some(("Alex K.", "AK")),
            category: PostCategory::Question,
            tags: &["homesickness", "freshman", "adjustment"],
            age: Duration::hours(12),
            replies: 11,
            hearts: 16,
        },
        PostSeed {
            id: "5",
            title: "Study group for accountability?",
            content: "Looking to form a virtual study group where we can check in with each other and stay motivated. Anyone interested in joining? We could meet a few times a week just to share goals and progress.",
            author: Some(("Jamie L.", "JL")),
            category: PostCategory::General,
            tags: &["study group", "accountability", "motivation"],
            age: Duration::days(1),
            replies: 4,
            hearts: 7,
        },
    ]
    .into_iter()
    .map(|seed| seed.into_post(now))
    .collect()
}

pub fn replies(now: DateTime<Utc>) -> Vec<Reply> {
    vec![
        Reply {
            id: "1".to_string(),
            post_id: "1".to_string(),
            content: "I totally understand this feeling! What helped me was breaking everything down into smaller tasks and celebrating small wins. Also, don't forget to take breaks - your brain needs rest to function well.".to_string(),
            author: ANONYMOUS_AUTHOR.to_string(),
            author_initials: ANONYMOUS_INITIALS.to_string(),
            timestamp: now - Duration::hours(1),
            hearts: 5,
            is_anonymous: true,
        },
        Reply {
            id: "2".to_string(),
            post_id: "1".to_string(),
            content: "Have you tried the Pomodoro technique? 25 minutes of focused work, then a 5-minute break. It really helps me when I feel overwhelmed. You've got this!".to_string(),
            author: "Mike R.".to_string(),
            author_initials: "MR".to_string(),
            timestamp: now - Duration::minutes(30),
            hearts: 3,
            is_anonymous: false,
        },
    ]
}

#[allow(clippy::too_many_arguments)]
fn resource(
    id: &str,
    title: &str,
    description: &str,
    kind: ResourceKind,
    category: ResourceCategory,
    duration: &str,
    rating: f64,
    difficulty: Difficulty,
    tags: &[&str],
    created_at: DateTime<Utc>,
) -> Resource {
    Resource {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        kind,
        category,
        duration: Some(duration.to_string()),
        rating,
        difficulty,
        tags: strings(tags),
        content: None,
        media_url: None,
        created_at,
    }
}

pub fn resources(now: DateTime<Utc>) -> Vec<Resource> {
    let days_ago = |days: i64| now - Duration::days(days);
    vec![
        Resource {
            media_url: Some("/audio/breathing-exercise.mp3".to_string()),
            ..resource(
                "1",
                "5-Minute Breathing Exercise",
                "A quick guided breathing exercise to help reduce anxiety and promote calm",
                ResourceKind::Audio,
                ResourceCategory::Anxiety,
                "5 min",
                4.8,
                Difficulty::Beginner,
                &["breathing", "quick", "anxiety relief"],
                days_ago(3),
            )
        },
        Resource {
            content: Some(
                "Academic stress is a common experience for college students...".to_string(),
            ),
            ..resource(
                "2",
                "Understanding Academic Stress",
                "Learn about the causes of academic stress and effective coping strategies",
                ResourceKind::Article,
                ResourceCategory::Academic,
                "8 min read",
                4.6,
                Difficulty::Beginner,
                &["stress management", "study tips", "time management"],
                days_ago(10),
            )
        },
        Resource {
            media_url: Some("/videos/muscle-relaxation.mp4".to_string()),
            ..resource(
                "3",
                "Progressive Muscle Relaxation",
                "A comprehensive guide to releasing physical tension and mental stress",
                ResourceKind::Video,
                ResourceCategory::Stress,
                "15 min",
                4.9,
                Difficulty::Beginner,
                &["relaxation", "physical wellness", "stress relief"],
                days_ago(7),
            )
        },
        resource(
            "4",
            "Sleep Hygiene Checklist",
            "Essential practices for better sleep quality and mental health",
            ResourceKind::Guide,
            ResourceCategory::Sleep,
            "3 min read",
            4.7,
            Difficulty::Beginner,
            &["sleep", "routine", "wellness"],
            days_ago(14),
        ),
        resource(
            "5",
            "Mindful Walking Meditation",
            "Combine physical activity with mindfulness for mental clarity",
            ResourceKind::Exercise,
            ResourceCategory::Mindfulness,
            "10 min",
            4.5,
            Difficulty::Intermediate,
            &["meditation", "walking", "mindfulness"],
            days_ago(5),
        ),
        resource(
            "6",
            "Building Healthy Relationships",
            "Navigate social connections and communication in college",
            ResourceKind::Article,
            ResourceCategory::Relationships,
            "12 min read",
            4.4,
            Difficulty::Intermediate,
            &["communication", "friendship", "boundaries"],
            days_ago(21),
        ),
        resource(
            "7",
            "Cognitive Behavioral Techniques",
            "Learn CBT strategies to challenge negative thought patterns",
            ResourceKind::Video,
            ResourceCategory::Depression,
            "20 min",
            4.8,
            Difficulty::Advanced,
            &["CBT", "thought patterns", "mental health"],
            days_ago(2),
        ),
        resource(
            "8",
            "Quick Anxiety Relief Techniques",
            "Immediate strategies you can use anywhere to manage anxiety",
            ResourceKind::Guide,
            ResourceCategory::Anxiety,
            "5 min read",
            4.9,
            Difficulty::Beginner,
            &["anxiety", "quick relief", "coping skills"],
            days_ago(1),
        ),
    ]
}

/// Counselors with availability published for `today` and the day after.
pub fn counselors(today: NaiveDate) -> Vec<Counselor> {
    let tomorrow = today + Duration::days(1);
    let availability = |today_slots: &[&str], tomorrow_slots: &[&str]| {
        vec![
            DayAvailability {
                date: today,
                slots: strings(today_slots),
            },
            DayAvailability {
                date: tomorrow,
                slots: strings(tomorrow_slots),
            },
        ]
    };

    vec![
        Counselor {
            id: "1".to_string(),
            name: "Dr. Sarah Chen".to_string(),
            title: "Licensed Clinical Psychologist".to_string(),
            specialties: strings(&["Anxiety", "Depression", "Academic Stress"]),
            rating: 4.9,
            experience: "8 years".to_string(),
            bio: "Dr. Chen specializes in helping college students navigate academic pressures and mental health challenges. She uses evidence-based approaches including CBT and mindfulness techniques.".to_string(),
            availability: availability(
                &["9:00 AM", "11:00 AM", "2:00 PM", "4:00 PM"],
                &["10:00 AM", "1:00 PM", "3:00 PM"],
            ),
            session_types: vec![SessionType::Video, SessionType::Phone, SessionType::Chat],
        },
        Counselor {
            id: "2".to_string(),
            name: "Dr. Michael Rodriguez".to_string(),
            title: "Licensed Professional Counselor".to_string(),
            specialties: strings(&["Trauma", "PTSD", "Relationship Issues"]),
            rating: 4.8,
            experience: "12 years".to_string(),
            bio: "Dr. Rodriguez has extensive experience working with young adults and specializes in trauma-informed care. He creates a safe, non-judgmental space for healing and growth.".to_string(),
            availability: availability(
                &["10:00 AM", "1:00 PM", "3:00 PM"],
                &["9:00 AM", "11:00 AM", "2:00 PM", "5:00 PM"],
            ),
            session_types: vec![SessionType::Video, SessionType::Phone],
        },
        Counselor {
            id: "3".to_string(),
            name: "Dr. Emily Johnson".to_string(),
            title: "Licensed Marriage & Family Therapist".to_string(),
            specialties: strings(&["Family Issues", "Identity", "LGBTQ+ Support"]),
            rating: 4.9,
            experience: "6 years".to_string(),
            bio: "Dr. Johnson is passionate about supporting students through identity exploration and family dynamics. She provides affirming care for LGBTQ+ students and those from diverse backgrounds.".to_string(),
            availability: availability(
                &["11:00 AM", "2:00 PM", "4:00 PM"],
                &["10:00 AM", "12:00 PM", "3:00 PM"],
            ),
            session_types: vec![SessionType::Video, SessionType::Chat],
        },
    ]
}

#[rustfmt::skip]
pub fn emergency_contacts() -> Vec<EmergencyContact> {
    use ContactType::*;
    use Priority::*;
    [
        ("1", "National Suicide Prevention Lifeline", "24/7 crisis support for suicidal thoughts and emotional distress", "988", None, "24/7", Crisis, High),
        ("2", "Crisis Text Line", "Text-based crisis support with trained counselors", "741741", Some("741741"), "24/7", Text, High),
        ("3", "Campus Counseling Center", "On-campus mental health services and crisis intervention", "(555) 123-4567", None, "Mon-Fri 8AM-5PM", Campus, High),
        ("4", "Campus Security", "24/7 campus safety and emergency response", "(555) 123-9999", None, "24/7", Campus, Medium),
        ("5", "Local Emergency Services", "Police, fire, and medical emergency services", "911", None, "24/7", Local, High),
        ("6", "SAMHSA National Helpline", "Treatment referral and information service", "1-800-662-4357", None, "24/7", Crisis, Medium),
        ("7", "National Domestic Violence Hotline", "Support for domestic violence situations", "1-800-799-7233", None, "24/7", Crisis, Medium),
        ("8", "LGBT National Hotline", "Support for LGBTQ+ individuals in crisis", "1-888-843-4564", None, "Mon-Fri 4PM-12AM, Sat 12PM-5PM", Crisis, Medium),
    ]
    .into_iter()
    .map(
        |(id, name, description, phone, text_number, availability, contact_type, priority)| {
            EmergencyContact {
                id: id.to_string(),
                name: name.to_string(),
                description: description.to_string(),
                phone: phone.to_string(),
                text_number: text_number.map(str::to_string),
                availability: availability.to_string(),
                contact_type,
                priority,
            }
        },
    )
    .collect()
}

#[cfg(test)]
pub(crate) fn reference_now() -> DateTime<Utc> {
    use chrono::TimeZone;
    Utc.with_ymd_and_hms(2024, 12, 10, 12, 0, 0).unwrap()
}
