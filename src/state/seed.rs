use crate::models::Dish;

/// (name, price, tags, elderly, children, hot, spicy level, cooking minutes)
type SeedRow = (&'static str, f64, &'static [&'static str], bool, bool, bool, u8, u32);

const SEED_ROWS: &[SeedRow] = &[
    // Home-style hot dishes
    ("番茄炒蛋", 12.0, &["热菜", "素菜", "经典", "清淡"], true, true, true, 0, 10),
    ("红烧肉", 35.0, &["热菜", "肉类", "经典"], true, true, true, 0, 60),
    ("宫保鸡丁", 28.0, &["热菜", "肉类", "辣"], true, false, true, 2, 20),
    ("鱼香肉丝", 25.0, &["热菜", "肉类"], true, true, true, 1, 15),
    ("麻婆豆腐", 18.0, &["热菜", "素菜", "辣"], true, false, true, 2, 15),
    ("回锅肉", 30.0, &["热菜", "肉类", "辣"], true, false, true, 2, 20),
    ("青椒肉丝", 22.0, &["热菜", "肉类"], true, true, true, 1, 15),
    ("干煸四季豆", 18.0, &["热菜", "素菜"], true, true, true, 1, 15),
    ("蒜蓉西兰花", 15.0, &["热菜", "素菜", "清淡"], true, true, true, 0, 10),
    ("可乐鸡翅", 28.0, &["热菜", "肉类", "甜"], true, true, true, 0, 30),
    ("糖醋排骨", 38.0, &["热菜", "肉类", "甜", "经典"], true, true, true, 0, 40),
    ("土豆烧牛肉", 42.0, &["热菜", "肉类", "经典"], true, true, true, 0, 50),
    ("辣子鸡", 32.0, &["热菜", "肉类", "辣"], false, false, true, 3, 25),
    ("蚂蚁上树", 18.0, &["热菜", "肉类"], true, true, true, 1, 15),
    ("地三鲜", 20.0, &["热菜", "素菜", "经典"], true, true, true, 0, 15),
    // Cold plates
    ("拍黄瓜", 10.0, &["凉菜", "素菜", "清淡"], true, true, false, 0, 5),
    ("凉拌木耳", 12.0, &["凉菜", "素菜", "清淡"], true, true, false, 0, 10),
    ("皮蛋豆腐", 15.0, &["凉菜", "素菜", "清淡"], true, true, false, 0, 5),
    ("口水鸡", 28.0, &["凉菜", "肉类", "辣"], false, false, false, 3, 30),
    ("凉拌腐竹", 12.0, &["凉菜", "素菜", "清淡"], true, true, false, 0, 10),
    ("蒜泥白肉", 25.0, &["凉菜", "肉类"], true, true, false, 1, 25),
    ("老醋花生", 10.0, &["凉菜", "素菜"], true, true, false, 0, 10),
    // Soups and porridge
    ("番茄蛋花汤", 12.0, &["汤", "清淡", "经典"], true, true, true, 0, 15),
    ("紫菜蛋汤", 10.0, &["汤", "清淡"], true, true, true, 0, 10),
    ("排骨莲藕汤", 35.0, &["汤", "肉类", "滋补"], true, true, true, 0, 90),
    ("酸辣汤", 15.0, &["汤", "辣"], true, false, true, 2, 15),
    ("玉米排骨汤", 30.0, &["汤", "肉类", "清淡", "滋补"], true, true, true, 0, 80),
    ("冬瓜丸子汤", 20.0, &["汤", "肉类", "清淡"], true, true, true, 0, 30),
    ("皮蛋瘦肉粥", 15.0, &["粥", "肉类", "清淡"], true, true, true, 0, 45),
    ("南瓜小米粥", 12.0, &["粥", "素菜", "清淡", "滋补"], true, true, true, 0, 40),
    // Staples
    ("蛋炒饭", 12.0, &["主食", "经典"], true, true, true, 0, 10),
    ("葱油拌面", 10.0, &["主食", "清淡"], true, true, true, 0, 10),
    ("炸酱面", 15.0, &["主食", "经典"], true, true, true, 0, 20),
    ("猪肉水饺", 20.0, &["主食", "肉类", "经典"], true, true, true, 0, 40),
    ("韭菜盒子", 15.0, &["主食", "素菜"], true, true, true, 0, 25),
    ("葱花饼", 10.0, &["主食", "素菜"], true, true, true, 0, 20),
    ("红糖馒头", 8.0, &["主食", "甜"], true, true, true, 0, 30),
    ("肉包子", 12.0, &["主食", "肉类"], true, true, true, 0, 35),
    // Seafood
    ("清蒸鲈鱼", 48.0, &["热菜", "海鲜", "清淡"], true, true, true, 0, 20),
    ("红烧带鱼", 35.0, &["热菜", "海鲜", "经典"], true, true, true, 0, 25),
    ("蒜蓉粉丝蒸虾", 55.0, &["热菜", "海鲜", "清淡"], true, true, true, 0, 15),
    ("油焖大虾", 58.0, &["热菜", "海鲜"], true, true, true, 0, 20),
    ("酸菜鱼", 42.0, &["热菜", "海鲜", "辣"], true, false, true, 2, 30),
    ("水煮鱼", 45.0, &["热菜", "海鲜", "辣"], false, false, true, 3, 25),
    // Desserts and drinks
    ("红豆沙", 10.0, &["甜品", "素菜", "甜", "滋补"], true, true, true, 0, 60),
    ("银耳莲子羹", 12.0, &["甜品", "素菜", "甜", "滋补"], true, true, true, 0, 45),
    ("绿豆汤", 8.0, &["饮品", "素菜", "清淡", "消暑"], true, true, false, 0, 40),
    ("酸梅汤", 8.0, &["饮品", "素菜", "消暑"], true, true, false, 0, 30),
    ("桂花糕", 15.0, &["甜品", "素菜", "甜"], true, true, false, 0, 45),
    ("芒果西米露", 15.0, &["甜品", "素菜", "甜", "消暑"], true, true, false, 0, 25),
];

/// Default household catalog written by `menu-planner seed`.
pub fn seed_dishes() -> Vec<Dish> {
    SEED_ROWS
        .iter()
        .map(
            |&(name, price, tags, elderly, children, is_hot, spicy_level, cooking_time)| Dish {
                name: name.to_string(),
                price,
                tags: tags.iter().map(|t| t.to_string()).collect(),
                is_hot,
                spicy_level,
                suitable_for_elderly: elderly,
                suitable_for_children: children,
                cooking_time,
            },
        )
        .collect()
}
