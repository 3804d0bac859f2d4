//! Static demo content.
//!
//! Everything the mocked "AI" ever shows comes from the constants below;
//! nothing here is mutated at runtime.

use crate::practice::lookup::AnnotationEntry;

// --- Essay optimization ---

pub const FLOW_STEPS: [(&str, &str); 3] = [
    ("上传作文", "粘贴文本或上传文档"),
    ("选择优化点", "选择关注的优化方面"),
    ("AI优化", "AI自动分析并优化作文"),
];

pub const SAMPLE_ESSAY_TITLE: &str = "Long Holidays";

pub const SAMPLE_ESSAY: &str = "Long holidays are usually good for college students. Firstly, we get a lot of time to study on our own. This helps us work on our weak points and improve our strong points. Secondly, we can do part-time jobs. This makes us understand responsibility and prepares us for life after college.\n\nHowever, there are also bad sides. Some students don’t use their time well. They play computer games too much. I think this might harm them.\n\nFor me, I will try to use my holiday time properly. I will study English because I am not good at it. Also, I will work as a part-time teacher. This way, I can make some money and use what I have learned.";

pub const AI_OPTIMIZED_TEXT: &str = "Generally speaking, long holidays are good for us college students. On the one hand, we have a lot of time to study by ourselves and thus improve weaknesses and further develop strengths. On the other hand, we can take part-time jobs, which can make us realize responsibility and make ourselves better prepared for social life. But every coin has two sides. Some students fail to make good use of their time and they are addicted to various computer games. I am afraid that they are likely to ruin themselves in this way. As far as I am concerned, I will try to make the best use of my precious time. I will spend most of my holidays studying English for that I am very poor at it. In addition, I will take a part-time job as private teacher. By this means, I can earn some money and put my knowledge into practice as well.";

pub const EVALUATION_TITLE: &str = "作文评价";

pub const EVALUATION_TEXT: &str = "Task Response（任务回应）\n考生明确回应了题目的主旨——长假对大学生的好处和坏处，并结合自身经历表达了个人看法。内容围绕题目，逻辑完整，涵盖“有利”与“不利”两个方面，最后也给出了自己的计划，符合 Discuss both sides and give your opinion 的要求。\n\nCoherence and Cohesion（语篇连贯与衔接）\n文章结构清晰，使用了基本的连接词（如 Firstly, Secondly, However, Also），段落划分合理，思路发展自然。但部分句子之间连接略显生硬，缺乏更丰富的衔接手段。\n\nLexical Resource（词汇资源）\n使用的词汇准确但较为基础，例如 study, part-time jobs, responsibility, computer games 等，表达清楚但缺少词汇的丰富性和灵活性。重复使用 study, part-time，缺少同义词替换或更具体描述。\n\nGrammatical Range and Accuracy（语法多样性与准确性）\n语法基本准确，使用了一些复合句（如 because I am not good at it），但整体句型结构较为简单，句式变化不够丰富。多数为简单陈述句，偶有句式略显重复。";

/// Phrases rendered as draggable marks inside the optimized essay. The same
/// list feeds the words tab of the accumulation library.
pub const DRAGGABLE_PHRASES: [&str; 5] = [
    "As far as I am concerned",
    "By this means",
    "wanders into",
    "concoctions",
    "contemporary",
];

// --- Reading comprehension ---

pub const READING_TITLE: &str = "For Your Coffee Break: Coffee Talk, Coffee Revolution";

pub const READING_TEXT: &str = "The book wanders into many corners of coffee arcana, for better or for worse (be sure to read \"The Women's Petition against Coffee\" and \"THE Mens Answer TO THE Womens Petition AGAINST COFFEE, VINDICATING Their own Performances, and the Vertues of that Liquor, from the Undeserved Aspersions lately cast upon them by their SCANDALOUS PAMPHLET\" from seventeenth-century England—they would make Chaucer blush). It waxes rather romantic about the superiority of Italian roasts and concoctions, and it doesn't follow the most logical narrative. But what it lacks in consistency it makes up for in illuminating history. Coffee made its way from Ethiopia to Yemen, evoking medical and philosophical accounts of its properties from some of the most eminent contemporary scholars. From Yemen it spread throughout Mecca and Medina and into Egypt. From Cairo it made its way to Constantinople, following the trajectory of the expansion of the Ottoman Empire. And it was Constantinople's proximity to and commerce with Venice that anointed Italy as coffee's gateway to Europe.\n\nIn addition to spates of resistance by Muslim clerics, coffee also met with resistance from the Church, which denounced the beverage as a devil's drink and attempted numerous prohibitions. Eventually however, in a hip move (perhaps presaging Pope Benedict's blessing of Facebook?) Pope Clement VIII sanctified coffee, saying, \"We will not let coffee remain the property of Satan. As Christians, our power is greater than Satan's, so we shall make coffee our own.\" And to complete the Abrahamic trifecta, once coffee was no longer excoriated by the Church, it was a Lebanese Jew who brought coffee to England. He opened the first coffeehouse in Oxford, thus inaugurating the storied relationship between university students and coffee.";

/// Sentences designated for highlighting, in application order.
pub const HIGHLIGHTED_SENTENCES: [&str; 2] = [
    "But what it lacks in consistency it makes up for in illuminating history.",
    "In addition to spates of resistance by Muslim clerics, coffee also met with resistance from the Church, which denounced the beverage as a devil's drink and attempted numerous prohibitions.",
];

/// The pre-authored analysis table, keyed by the exact sentence text.
pub const ANALYZED_SENTENCES: [AnnotationEntry; 2] = [
    AnnotationEntry {
        original: "But what it lacks in consistency it makes up for in illuminating history.",
        analysis: "[转折连词] But\n[宾语从句] what it lacks in consistency\n[主语] it\n[谓语] makes up for\n[方式/范围状语] in illuminating history\n\n翻译：但它在阐明历史方面弥补了一致性的不足。",
    },
    AnnotationEntry {
        original: "In addition to spates of resistance by Muslim clerics, coffee also met with resistance from the Church, which denounced the beverage as a devil's drink and attempted numerous prohibitions.",
        analysis: "[状语] In addition to spates of resistance by Muslim clerics,\n[主句主语] coffee\n[副词] also\n[主句谓语] met\n[主句宾语] with resistance from the Church,\n    [定语从句] which denounced the beverage as a devil's drink\n                    and attempted numerous prohibitions.\n\n翻译：除了穆斯林神职人员的强烈抵制之外，咖啡还受到了教会的抵制，教会谴责这种饮料是魔鬼的饮料，并多次尝试禁止。",
    },
];

// --- Accumulation library ---

pub const ACCUMULATED_SENTENCES: [&str; 2] = [
    "But what it lacks in consistency it makes up for in illuminating history.",
    "The narwhal is a deep-sea whale with a tusk on its forehead.",
];

// --- Chat ---

pub const AI_TUTOR_NAME: &str = "Catherine";
pub const USER_NAME: &str = "Me";

pub const CHAT_GREETING: &str = "Hi Kevin! It's nice to meet you. How are you today?";

/// The seeded transcript shown when the chat page opens: (is_user, text).
pub const CHAT_OPENING: [(bool, &str); 6] = [
    (false, "Hi Kevin! It's nice to meet you. How are you today?"),
    (true, "I'm good, and how are you?"),
    (false, "I'm good too, thanks. This coffee shop is cozy, isn't it?"),
    (true, "Yeah, it's a great cave, and you are very pretty today."),
    (false, "Thank you, Kevin. That's very kind of you to say. Do you come here often?"),
    (true, "Now this is my first time here. What would you like to drink?"),
];

pub const MAX_CHAT_ROUNDS: u32 = 5;

/// Tutor reply for round 1..=5.
pub const CHAT_SCRIPT: [&str; 5] = [
    "I'm good too, thanks. This coffee shop is cozy, isn't it?",
    "Thank you, Kevin. That's very kind of you to say. Do you come here often?",
    "I think I'll have a latte. What about you?",
    "We've had a great conversation. Is there anything else you'd like to talk about?",
    "This has been a wonderful chat! I think we've covered quite a lot today.",
];

pub const CHAT_FALLBACK_REPLY: &str = "Please continue, I'm listening.";

/// Canned history sidebar entries: (title, date, preview).
pub const CHAT_HISTORY: [(&str, &str, &str); 3] = [
    ("咖啡馆闲聊", "2025-04-17", "通过沉浸式咖啡馆闲聊提升英语口语能力"),
    ("哈利波特电影讨论", "2025-03-10", "聊了最喜欢的哈利波特电影..."),
    ("旅行计划讨论", "2025-03-05", "讨论了暑假旅行计划..."),
];

/// Conversation scenes offered by the new-chat dialog: (id, title).
pub const SCENES: [(&str, &str); 4] = [
    ("coffee", "咖啡馆闲聊"),
    ("airport", "机场值机"),
    ("job", "求职场景"),
    ("hotel", "酒店入住"),
];

// --- Oral report ---

pub const REPORT_DURATION: &str = "3分34秒";
pub const REPORT_TURNS: u32 = 5;
pub const REPORT_WORDS_USED: u32 = 49;

/// Word-level distribution of the conversation vocabulary: (label, percent).
pub const WORD_DISTRIBUTION: [(&str, u8); 4] =
    [("小学", 51), ("初中", 12), ("高中", 8), ("其他", 29)];

pub const FLUENCY_SCORE: (u8, u8) = (5, 5);
pub const PROFICIENCY_SCORE: (u8, u8) = (4, 5);

pub const FLUENCY_COMMENT: &str = "用户回复流畅，能够很好地理解和回应AI机器人的问题。";
pub const PROFICIENCY_COMMENT: &str = "用户对话熟练度较好的掌握，能够提供相关的信息和回答。";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn analyzed_sentences_are_designated_highlights() {
        for entry in &ANALYZED_SENTENCES {
            assert!(HIGHLIGHTED_SENTENCES.contains(&entry.original));
        }
    }

    #[test]
    fn highlights_occur_in_the_reading_text() {
        for sentence in &HIGHLIGHTED_SENTENCES {
            assert!(READING_TEXT.contains(sentence));
        }
    }

    #[test]
    fn essay_phrases_occur_in_the_optimized_text() {
        assert!(AI_OPTIMIZED_TEXT.contains("As far as I am concerned"));
        assert!(AI_OPTIMIZED_TEXT.contains("By this means"));
    }

    #[test]
    fn chat_script_covers_every_round() {
        assert_eq!(CHAT_SCRIPT.len() as u32, MAX_CHAT_ROUNDS);
    }

    #[test]
    fn dropping_the_first_highlight_reveals_its_analysis_verbatim() {
        use crate::practice::payload::{DragPayload, PayloadKind};
        use crate::practice::slots::LookupSlots;
        use std::time::{Duration, Instant};

        let t0 = Instant::now();
        let mut slots = LookupSlots::new(
            2,
            vec![PayloadKind::HighlightedSentence, PayloadKind::SelectedText],
            &ANALYZED_SENTENCES,
            Duration::from_millis(2000),
        );
        let sentence = HIGHLIGHTED_SENTENCES[0];
        assert!(slots.drop_payload(0, &DragPayload::highlighted(sentence), t0));
        assert!(slots.is_loading(0));

        slots.tick(t0 + Duration::from_millis(2000));
        let analysis = slots.analysis(0).expect("analysis for designated highlight");
        assert_eq!(analysis, ANALYZED_SENTENCES[0].analysis);
        // The embedded translation line survives verbatim.
        assert!(analysis.contains("翻译：但它在阐明历史方面弥补了一致性的不足。"));
    }

    #[test]
    fn word_distribution_sums_to_one_hundred() {
        let total: u32 = WORD_DISTRIBUTION.iter().map(|(_, pct)| *pct as u32).sum();
        assert_eq!(total, 100);
    }
}
