use crate::models::PartyConfiguration;
use crate::season::SolarTerm;
use crate::weather::WeatherCondition;

pub const DISH_RECOGNITION_PROMPT: &str = r#"请识别这张图片中的菜品，并以纯JSON格式返回以下信息，不要包含任何markdown标记或额外说明：
{
  "name": "菜品名称",
  "estimatedPrice": 预估价格（数字，单位元）,
  "spicyLevel": 辣度（0=不辣，1=微辣，2=中辣，3=重辣）,
  "isHot": 是否热菜（true/false）,
  "suitableForElderly": 是否适合老人（true/false）,
  "suitableForChildren": 是否适合儿童（true/false）,
  "tags": ["标签1", "标签2"]
}
只返回JSON，不要有其他内容。"#;

/// Menu recommendation prompt. Dish names must come from `catalog_text`.
pub fn menu_prompt(
    catalog_text: &str,
    config: &PartyConfiguration,
    weather: &WeatherCondition,
    solar_term: SolarTerm,
) -> String {
    format!(
        r#"你是一位专业的中餐营养师。请根据以下信息，从可用菜品中推荐今日菜谱。

【就餐人数】成年男性{men}人，成年女性{women}人，儿童{children}人，老人{elderly}人
【天气】{weather}
【节气】{term}
【饮食建议】{advice}

【可用菜品列表】
{catalog_text}

请推荐合理搭配的菜谱，注意：
1. 有儿童时避免重辣菜品
2. 有老人时注意清淡易消化
3. 根据天气和节气调整冷热搭配
4. 荤素搭配均衡

以纯JSON格式返回，不要包含markdown标记或额外说明：
{{
  "mainDishes": ["主菜名1", "主菜名2"],
  "sideDishes": ["副菜名1"],
  "soups": ["汤品名"],
  "staples": ["主食名"],
  "reason": "推荐理由（一句话）"
}}
菜名必须从上面的可用菜品列表中选择，只返回JSON。"#,
        men = config.adult_men,
        women = config.adult_women,
        children = config.children,
        elderly = config.elderly,
        weather = weather.summary(),
        term = solar_term.name(),
        advice = solar_term.dietary_suggestion().description,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::weather::ConditionType;

    #[test]
    fn test_menu_prompt_embeds_context() {
        let config = PartyConfiguration::new(1, 2, 1, 0);
        let weather = WeatherCondition::new(18.4, ConditionType::Rainy, 0.8);
        let prompt = menu_prompt("番茄炒蛋(¥12,热菜,不辣,标签:热菜)", &config, &weather, SolarTerm::Qingming);

        assert!(prompt.contains("成年男性1人，成年女性2人，儿童1人，老人0人"));
        assert!(prompt.contains("【天气】雨 18°C"));
        assert!(prompt.contains("【节气】清明"));
        assert!(prompt.contains("番茄炒蛋(¥12,热菜,不辣,标签:热菜)"));
        assert!(prompt.contains(r#""mainDishes""#));
    }
}
