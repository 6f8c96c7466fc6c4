use crate::error::{AppError, AppResult};
use rand::Rng;
use std::collections::HashMap;
use std::hash::Hash;

/// 生成抽签结果：每个参与者被分配给另一个参与者（送礼对象）
///
/// 约束:
/// - 结果是输入集合上的一个置换（每人送一份、收一份）
/// - 无不动点（不能抽到自己）
/// - 少于2人无法抽签，返回 InsufficientParticipants
///
/// 算法: Fisher-Yates 洗牌 + 环形错位配对 + 两轮自配对修复。
/// 修复通过交换两个条目的目标实现，保证每一步都维持置换性质。
/// 产生的错排分布接近均匀但并非严格均匀（修复引入少量偏差）。
///
/// 随机源由调用方注入，便于测试时使用种子化的 RNG 复现抽签。
pub fn shuffle_assignments<T, R>(participants: &[T], rng: &mut R) -> AppResult<HashMap<T, T>>
where
    T: Clone + Eq + Hash,
    R: Rng + ?Sized,
{
    let n = participants.len();
    if n < 2 {
        return Err(AppError::InsufficientParticipants(n));
    }

    // 防御性拷贝后做无偏 Fisher-Yates 洗牌
    let mut shuffled: Vec<T> = participants.to_vec();
    for i in (1..n).rev() {
        let j = rng.gen_range(0..=i);
        shuffled.swap(i, j);
    }

    // 候选配对: 原顺序第 i 人 -> 洗牌后第 (i+1) mod n 人
    // 旋转保证候选是一个置换，但可能出现自配对
    let mut targets: Vec<T> = (0..n).map(|i| shuffled[(i + 1) % n].clone()).collect();

    // 第一轮修复: 自配对条目与前一条目交换目标
    for i in 0..n {
        if participants[i] == targets[i] {
            let prev = (i + n - 1) % n;
            targets.swap(i, prev);
        }
    }

    // 第二轮修复: 全量重扫, 剩余自配对与首个合格条目交换目标
    // 合格 = 对方及其目标都不是该自配对参与者; 交换不会产生新的自配对
    for i in 0..n {
        if participants[i] != targets[i] {
            continue;
        }
        for j in 0..n {
            if j != i && participants[j] != participants[i] && targets[j] != participants[i] {
                targets.swap(i, j);
                break;
            }
        }
    }

    Ok(participants.iter().cloned().zip(targets).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    fn assert_valid_derangement(input: &[&str], mapping: &HashMap<&str, &str>) {
        let input_set: HashSet<&str> = input.iter().copied().collect();
        let key_set: HashSet<&str> = mapping.keys().copied().collect();
        let value_set: HashSet<&str> = mapping.values().copied().collect();
        assert_eq!(key_set, input_set);
        assert_eq!(value_set, input_set);
        // 值集合与键集合同大小即双射
        assert_eq!(value_set.len(), mapping.len());
        for (p, assigned) in mapping {
            assert_ne!(p, assigned, "{p} was assigned to themselves");
        }
    }

    #[test]
    fn test_rejects_fewer_than_two_participants() {
        let mut rng = StdRng::seed_from_u64(1);
        let empty: Vec<&str> = vec![];
        assert!(matches!(
            shuffle_assignments(&empty, &mut rng),
            Err(AppError::InsufficientParticipants(0))
        ));
        assert!(matches!(
            shuffle_assignments(&["solo"], &mut rng),
            Err(AppError::InsufficientParticipants(1))
        ));
    }

    #[test]
    fn test_two_participants_always_swap() {
        // n=2 唯一的错排就是互换，任何洗牌结果都必须得到它
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let mapping = shuffle_assignments(&["alice", "bob"], &mut rng).unwrap();
            assert_eq!(mapping["alice"], "bob");
            assert_eq!(mapping["bob"], "alice");
        }
    }

    #[test]
    fn test_permutation_and_no_fixed_points() {
        let names = [
            "a", "b", "c", "d", "e", "f", "g", "h", "i", "j", "k", "l",
        ];
        let mut rng = StdRng::seed_from_u64(42);
        for n in 2..=names.len() {
            let input = &names[..n];
            for _ in 0..500 {
                let mapping = shuffle_assignments(input, &mut rng).unwrap();
                assert_valid_derangement(input, &mapping);
            }
        }
    }

    #[test]
    fn test_three_participants_only_valid_cycles() {
        // 3人只有两个错排: A→B→C→A 与 A→C→B→A，一万次试验必须只出现这两种
        let input = ["a", "b", "c"];
        let mut rng = StdRng::seed_from_u64(2024);
        let mut seen_abc = 0u32;
        let mut seen_acb = 0u32;
        for _ in 0..10_000 {
            let m = shuffle_assignments(&input, &mut rng).unwrap();
            assert_valid_derangement(&input, &m);
            if m["a"] == "b" {
                assert_eq!(m["b"], "c");
                assert_eq!(m["c"], "a");
                seen_abc += 1;
            } else {
                assert_eq!(m["a"], "c");
                assert_eq!(m["c"], "b");
                assert_eq!(m["b"], "a");
                seen_acb += 1;
            }
        }
        // 两种环都应出现（分布接近均匀，不校验精确比例）
        assert!(seen_abc > 0);
        assert!(seen_acb > 0);
        assert_eq!(seen_abc + seen_acb, 10_000);
    }

    #[test]
    fn test_relabeling_input_order_still_valid() {
        let mut input = vec!["w", "x", "y", "z", "q"];
        let mut rng = StdRng::seed_from_u64(99);
        for _ in 0..100 {
            // 打乱输入顺序后结果仍须是合法错排
            for i in (1..input.len()).rev() {
                let j = rng.gen_range(0..=i);
                input.swap(i, j);
            }
            let mapping = shuffle_assignments(&input, &mut rng).unwrap();
            assert_valid_derangement(&input, &mapping);
        }
    }

    #[test]
    fn test_seeded_rng_reproduces_same_draw() {
        let input = ["a", "b", "c", "d", "e"];
        let m1 = shuffle_assignments(&input, &mut StdRng::seed_from_u64(5)).unwrap();
        let m2 = shuffle_assignments(&input, &mut StdRng::seed_from_u64(5)).unwrap();
        assert_eq!(m1, m2);
    }

    #[test]
    fn test_input_not_mutated() {
        let input = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        let before = input.clone();
        let mut rng = StdRng::seed_from_u64(11);
        let _ = shuffle_assignments(&input, &mut rng).unwrap();
        assert_eq!(input, before);
    }
}
