use rand::Rng;
use regex::Regex;
use std::sync::LazyLock;

/// 节日 emoji 池（参与者列表的装饰标签）
const FESTIVE_EMOJIS: [&str; 17] = [
    "🎄", "🎁", "🎅", "❄️", "⭐", "🌟", "🎀", "🔔", "🕯️", "🎊", "🎉", "🎈", "🧦", "🍪", "🥛",
    "🦌", "⛄",
];

static EMOJI_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[\x{1F300}-\x{1F9FF}\x{2600}-\x{26FF}\x{2700}-\x{27BF}]\x{FE0F}?\s*")
        .expect("emoji prefix regex")
});

/// 按随机顺序轮转发放 emoji 的游标对象
///
/// 由调用方持有并显式传递（通常一次注册批次一个实例），
/// 避免进程级的共享可变状态。池耗尽后重新洗牌继续发放。
pub struct EmojiPool {
    pool: Vec<&'static str>,
    cursor: usize,
}

impl EmojiPool {
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut pool: Vec<&'static str> = FESTIVE_EMOJIS.to_vec();
        shuffle(&mut pool, rng);
        Self { pool, cursor: 0 }
    }

    /// 取下一个 emoji，一轮之内不重复
    pub fn next_emoji<R: Rng + ?Sized>(&mut self, rng: &mut R) -> &'static str {
        if self.cursor >= self.pool.len() {
            shuffle(&mut self.pool, rng);
            self.cursor = 0;
        }
        let emoji = self.pool[self.cursor];
        self.cursor += 1;
        emoji
    }
}

fn shuffle<R: Rng + ?Sized>(items: &mut [&'static str], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.gen_range(0..=i);
        items.swap(i, j);
    }
}

/// 存储用：给名字加 emoji 前缀
pub fn add_emoji_to_name(name: &str, emoji: &str) -> String {
    format!("{emoji} {name}")
}

/// 展示/编辑用：去掉名字的 emoji 前缀
pub fn strip_emoji_prefix(name: &str) -> String {
    EMOJI_PREFIX.replace(name, "").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    #[test]
    fn test_pool_does_not_repeat_within_one_round() {
        let mut rng = StdRng::seed_from_u64(17);
        let mut pool = EmojiPool::new(&mut rng);
        let mut seen = HashSet::new();
        for _ in 0..FESTIVE_EMOJIS.len() {
            assert!(seen.insert(pool.next_emoji(&mut rng)));
        }
    }

    #[test]
    fn test_pool_reshuffles_after_exhaustion() {
        let mut rng = StdRng::seed_from_u64(18);
        let mut pool = EmojiPool::new(&mut rng);
        // 两整轮都能发放，且发放的都是池内元素
        for _ in 0..(FESTIVE_EMOJIS.len() * 2) {
            let e = pool.next_emoji(&mut rng);
            assert!(FESTIVE_EMOJIS.contains(&e));
        }
    }

    #[test]
    fn test_add_and_strip_emoji() {
        let decorated = add_emoji_to_name("Kari", "🎁");
        assert_eq!(decorated, "🎁 Kari");
        assert_eq!(strip_emoji_prefix(&decorated), "Kari");
        // 带变体选择符的 emoji 也能去掉
        assert_eq!(strip_emoji_prefix("❄️ Ola"), "Ola");
        // 无前缀时原样返回
        assert_eq!(strip_emoji_prefix("Nils"), "Nils");
    }
}
