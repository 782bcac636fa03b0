//! 默认数据集
//!
//! 首次启动时写入：三部小说、第一部的三个章节（第三章付费 15 金币）、
//! 一个管理员和一个普通读者。

use chrono::Utc;

use crate::domain::account::{Role, User, UserId};
use crate::domain::novel::{Chapter, ChapterId, Novel, NovelId, NovelStatus};

fn tags(values: &[&str]) -> Vec<String> {
    values.iter().map(|t| t.to_string()).collect()
}

pub(super) fn novels() -> Vec<Novel> {
    let now = Utc::now();
    vec![
        Novel {
            id: NovelId::from("1"),
            title: "The Azure Sovereign".to_string(),
            author: "Celestial Quill".to_string(),
            description: "In a world where martial arts determine one's destiny, a young orphan discovers a mysterious azure ring that holds the soul of an ancient dragon. His journey to the peak of the cultivation world begins now.".to_string(),
            cover_url: "https://picsum.photos/seed/azure/300/450".to_string(),
            tags: tags(&["Xianxia", "Action", "Adventure", "Cultivation"]),
            status: NovelStatus::Ongoing,
            views: 12500,
            rating: 4.8,
            updated_at: now,
        },
        Novel {
            id: NovelId::from("2"),
            title: "Reborn as a Cyber-Cat".to_string(),
            author: "Neon Whisker".to_string(),
            description: "After a fatal server crash, elite hacker Jin wakes up in 2077... as a cybernetic stray cat? He must navigate the neon-lit streets of Neo-Tokyo, hacking corp mainframes with his neural-linked paws.".to_string(),
            cover_url: "https://picsum.photos/seed/cat/300/450".to_string(),
            tags: tags(&["Sci-Fi", "Cyberpunk", "Comedy", "Reincarnation"]),
            status: NovelStatus::Ongoing,
            views: 8400,
            rating: 4.5,
            updated_at: now,
        },
        Novel {
            id: NovelId::from("3"),
            title: "Silence of the Stars".to_string(),
            author: "Void Walker".to_string(),
            description: "Humanity has expanded to the edges of the galaxy, only to find that the stars are going out one by one. Captain Elara Vance commands the last scout ship to investigate the darkening void.".to_string(),
            cover_url: "https://picsum.photos/seed/space/300/450".to_string(),
            tags: tags(&["Sci-Fi", "Mystery", "Space Opera"]),
            status: NovelStatus::Completed,
            views: 45000,
            rating: 4.9,
            updated_at: now,
        },
    ]
}

pub(super) fn chapters() -> Vec<Chapter> {
    let now = Utc::now();
    vec![
        Chapter {
            id: ChapterId::from("c1-1"),
            novel_id: NovelId::from("1"),
            title: "Chapter 1: The Awakening".to_string(),
            content: "<p>The morning sun cast long shadows over the sleepy village of Green Willow. Han Li wiped the sweat from his brow...</p><p>Suddenly, the ring on his finger pulsed with a strange, cold light.</p>".to_string(),
            order: 1,
            is_paid: false,
            price: 0,
            created_at: now,
        },
        Chapter {
            id: ChapterId::from("c1-2"),
            novel_id: NovelId::from("1"),
            title: "Chapter 2: First Breath".to_string(),
            content: "<p>Breathing techniques were the foundation of all cultivation. Han Li sat cross-legged, mimicking the posture he had seen in the ancient scroll...</p>".to_string(),
            order: 2,
            is_paid: false,
            price: 0,
            created_at: now,
        },
        Chapter {
            id: ChapterId::from("c1-3"),
            novel_id: NovelId::from("1"),
            title: "Chapter 3: The Challenge (Paid)".to_string(),
            content: "<p>The village bully, Iron Fist Zhao, blocked the path. 'Hand over the herbs, trash!' he sneered.</p><p>Han Li clenched his fist. He was no longer the weak boy from yesterday.</p>".to_string(),
            order: 3,
            is_paid: true,
            price: 15,
            created_at: now,
        },
    ]
}

pub(super) fn users() -> Vec<User> {
    vec![
        User {
            id: UserId::from("admin1"),
            username: "AdminUser".to_string(),
            email: "admin@novelverse.com".to_string(),
            role: Role::Admin,
            coins: 9999,
            avatar: None,
            bookmarks: Vec::new(),
            purchased_chapters: Vec::new(),
        },
        User {
            id: UserId::from("user1"),
            username: "ReaderOne".to_string(),
            email: "reader@novelverse.com".to_string(),
            role: Role::User,
            coins: 50,
            avatar: None,
            bookmarks: vec![NovelId::from("1")],
            purchased_chapters: Vec::new(),
        },
    ]
}
