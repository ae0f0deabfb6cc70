//! Template shapes: the fixed role sequence and phrasing pools for each variant.
//!
//! Phrasings are plain strings with `{placeholder}` slots filled by the composer:
//! `{topic}`, `{category}`, `{category_lower}`, `{trend}` and `{emoji}`.

use crate::generation::models::TemplateVariant;

/// A named slot in a template's sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Hook,
    Situation,
    Connection,
    Lesson,
    CallToAction,
    Observation,
    Analysis,
    Implication,
    Discussion,
    Problem,
    Solution,
    Steps,
    Outcome,
    Context,
    Question,
    Take,
    Invitation,
    Statistic,
    Takeaway,
    Statement,
    Evidence,
    Nuance,
    Debate,
    Milestone,
    Journey,
    Lessons,
    Inspiration,
    Thanks,
    Setup,
    Points,
    Summary,
    Engagement,
}

/// How a role is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phrasing {
    /// Always the same sentence.
    Fixed(&'static str),
    /// One sentence drawn uniformly per call.
    OneOf(&'static [&'static str]),
    /// `with_trend` when a trending phrase is in play, otherwise `fallback`.
    Trending {
        with_trend: &'static str,
        fallback: &'static str,
    },
    /// One line per item, each led by the emoji (or a bullet when emoji are off).
    Bulleted(&'static [&'static str]),
    /// One numbered line per item.
    Numbered(&'static [&'static str]),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoleSpec {
    pub role: Role,
    pub phrasing: Phrasing,
}

/// Roles rendered into one paragraph, joined by a single space.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockSpec {
    pub roles: Vec<RoleSpec>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateShape {
    pub blocks: Vec<BlockSpec>,
    /// Variant tags appended after `#<category> #<topic>`.
    pub tags: [&'static str; 2],
}

fn block(roles: Vec<RoleSpec>) -> BlockSpec {
    BlockSpec { roles }
}

fn fixed(role: Role, text: &'static str) -> RoleSpec {
    RoleSpec {
        role,
        phrasing: Phrasing::Fixed(text),
    }
}

fn one_of(role: Role, options: &'static [&'static str]) -> RoleSpec {
    RoleSpec {
        role,
        phrasing: Phrasing::OneOf(options),
    }
}

fn trending(role: Role, with_trend: &'static str, fallback: &'static str) -> RoleSpec {
    RoleSpec {
        role,
        phrasing: Phrasing::Trending {
            with_trend,
            fallback,
        },
    }
}

/// Returns the shape for a variant.
pub fn shape(variant: TemplateVariant) -> TemplateShape {
    match variant {
        TemplateVariant::Story => TemplateShape {
            blocks: vec![
                block(vec![one_of(
                    Role::Hook,
                    &[
                        "Last week changed how I think about {topic}",
                        "Here's what {topic} taught me about {category}",
                        "A conversation about {topic} opened my eyes",
                        "My biggest misconception about {topic}? Let me tell you...",
                    ],
                )]),
                block(vec![
                    fixed(
                        Role::Situation,
                        "The situation forced me to reconsider everything I thought I knew.",
                    ),
                    trending(
                        Role::Connection,
                        "It connects to what we're seeing with {trend}.",
                        "It's reshaping how we approach {category_lower}.",
                    ),
                ]),
                block(vec![fixed(
                    Role::Lesson,
                    "The key insight: {topic} is about empowering people, not replacing them.",
                )]),
                block(vec![fixed(
                    Role::CallToAction,
                    "What's your experience with {topic}? {emoji}",
                )]),
            ],
            tags: ["Story", "Leadership"],
        },

        TemplateVariant::Insight => TemplateShape {
            blocks: vec![
                block(vec![one_of(
                    Role::Observation,
                    &[
                        "{emoji} {topic} is fundamentally changing {category}",
                        "{emoji} The future of {topic} isn't what you think",
                        "{emoji} Here's what most people miss about {topic}",
                    ],
                )]),
                block(vec![trending(
                    Role::Analysis,
                    "While everyone focuses on {trend}, the real opportunity is in human-AI collaboration.",
                    "The companies winning focus on augmentation, not automation.",
                )]),
                block(vec![fixed(
                    Role::Implication,
                    "This means {category} professionals need to rethink their approach.",
                )]),
                block(vec![fixed(
                    Role::Discussion,
                    "What's your take on {topic}'s impact? {emoji}",
                )]),
            ],
            tags: ["Innovation", "ThoughtLeadership"],
        },

        TemplateVariant::Tips => TemplateShape {
            blocks: vec![
                block(vec![fixed(
                    Role::Problem,
                    "Struggling with {topic} implementation?",
                )]),
                block(vec![fixed(Role::Solution, "Here's what's working:")]),
                block(vec![RoleSpec {
                    role: Role::Steps,
                    phrasing: Phrasing::Bulleted(&[
                        "Start with pilot projects",
                        "Focus on user experience first",
                        "Measure outcomes, not just outputs",
                    ]),
                }]),
                block(vec![fixed(
                    Role::Outcome,
                    "Result: Smoother adoption and better ROI.",
                )]),
                block(vec![fixed(
                    Role::CallToAction,
                    "What would you add to this list? {emoji}",
                )]),
            ],
            tags: ["Tips", "BestPractices"],
        },

        TemplateVariant::Question => TemplateShape {
            blocks: vec![
                block(vec![one_of(
                    Role::Context,
                    &[
                        "Quick question for {category} professionals:",
                        "Honest question about {topic}:",
                        "Help me understand this better:",
                    ],
                )]),
                block(vec![one_of(
                    Role::Question,
                    &[
                        "Is {topic} overhyped or underutilized?",
                        "What's the biggest {topic} misconception?",
                        "How do you measure {topic} success?",
                    ],
                )]),
                block(vec![
                    fixed(
                        Role::Take,
                        "My take: Success comes from focusing on people, not just technology.",
                    ),
                    trending(
                        Role::Connection,
                        "Especially with {trend} evolving rapidly.",
                        "The landscape is changing fast.",
                    ),
                ]),
                block(vec![fixed(
                    Role::Invitation,
                    "What's your perspective? {emoji}",
                )]),
            ],
            tags: ["Discussion", "Community"],
        },

        TemplateVariant::Data => TemplateShape {
            blocks: vec![
                block(vec![one_of(
                    Role::Statistic,
                    &[
                        "{emoji} New data on {topic}: 73% of companies report improved efficiency",
                        "{emoji} New data on {topic}: 2.5x faster implementation than expected",
                        "{emoji} New data on {topic}: 45% reduction in operational costs",
                        "{emoji} New data on {topic}: 89% of users exceed initial expectations",
                    ],
                )]),
                block(vec![
                    fixed(Role::Context, "This aligns with industry-wide trends."),
                    trending(
                        Role::Analysis,
                        "Particularly relevant given the focus on {trend}.",
                        "The key differentiator? Investment in training and change management.",
                    ),
                ]),
                block(vec![fixed(
                    Role::Takeaway,
                    "Bottom line: {topic} ROI depends on implementation strategy.",
                )]),
                block(vec![fixed(
                    Role::CallToAction,
                    "What metrics are you tracking? {emoji}",
                )]),
            ],
            tags: ["Data", "ROI"],
        },

        TemplateVariant::Opinion => TemplateShape {
            blocks: vec![
                block(vec![one_of(
                    Role::Statement,
                    &[
                        "Unpopular opinion: Most {category} companies are approaching {topic} wrong",
                        "Hot take: {topic} isn't the problem—leadership mindset is",
                        "Controversial view: {topic} hype is creating unrealistic expectations",
                    ],
                )]),
                block(vec![fixed(
                    Role::Evidence,
                    "Here's why: Focus on technology over people strategy.",
                )]),
                block(vec![trending(
                    Role::Nuance,
                    "Don't get me wrong—{trend} is important. But without proper change management, it's just expensive technology.",
                    "I'm not anti-{topic}. But success requires more than just implementation.",
                )]),
                block(vec![fixed(
                    Role::Debate,
                    "Am I off base here? Change my mind! {emoji}",
                )]),
            ],
            tags: ["Opinion", "ChangeMyMind"],
        },

        TemplateVariant::Achievement => TemplateShape {
            blocks: vec![
                block(vec![one_of(
                    Role::Milestone,
                    &[
                        "Milestone: Our {topic} initiative just hit 6 months! {emoji}",
                        "Celebrating: Successfully implemented {topic} across our team",
                        "Proud moment: Led our first {topic} transformation",
                    ],
                )]),
                block(vec![fixed(
                    Role::Journey,
                    "The journey wasn't easy—lots of learning and iteration.",
                )]),
                block(vec![fixed(
                    Role::Lessons,
                    "Key lessons: Start with why, involve everyone, measure impact.",
                )]),
                block(vec![trending(
                    Role::Inspiration,
                    "To anyone working on {trend}: persistence pays off.",
                    "To anyone implementing {topic}: trust the process.",
                )]),
                block(vec![fixed(Role::Thanks, "Huge thanks to my team! {emoji}")]),
            ],
            tags: ["Achievement", "Teamwork"],
        },

        TemplateVariant::List => TemplateShape {
            blocks: vec![
                block(vec![fixed(
                    Role::Setup,
                    "5 things I wish I knew about {topic}:",
                )]),
                block(vec![RoleSpec {
                    role: Role::Points,
                    phrasing: Phrasing::Numbered(&[
                        "Implementation is 20% tech, 80% people",
                        "Start with pilots, not company-wide rollouts",
                        "Measure outcomes, not just outputs",
                        "Training is investment, not cost",
                        "Feedback loops are everything",
                    ]),
                }]),
                block(vec![trending(
                    Role::Summary,
                    "With {trend} accelerating, these fundamentals matter more than ever.",
                    "Companies that nail these see 3x better adoption rates.",
                )]),
                block(vec![fixed(Role::Engagement, "What would you add? {emoji}")]),
            ],
            tags: ["Tips", "Lessons"],
        },
    }
}
