use crate::common::*;

/* 지도 차트(china)에서 사용하는 1급 행정구역 정식 명칭 */
static PROVINCE_MAPPING: once_lazy<HashMap<&'static str, &'static str>> = once_lazy::new(|| {
    HashMap::from([
        ("北京", "北京市"),
        ("天津", "天津市"),
        ("河北", "河北省"),
        ("山西", "山西省"),
        ("内蒙古", "内蒙古自治区"),
        ("辽宁", "辽宁省"),
        ("吉林", "吉林省"),
        ("黑龙江", "黑龙江省"),
        ("上海", "上海市"),
        ("江苏", "江苏省"),
        ("浙江", "浙江省"),
        ("安徽", "安徽省"),
        ("福建", "福建省"),
        ("江西", "江西省"),
        ("山东", "山东省"),
        ("河南", "河南省"),
        ("湖北", "湖北省"),
        ("湖南", "湖南省"),
        ("广东", "广东省"),
        ("广西", "广西壮族自治区"),
        ("海南", "海南省"),
        ("重庆", "重庆市"),
        ("四川", "四川省"),
        ("贵州", "贵州省"),
        ("云南", "云南省"),
        ("西藏", "西藏自治区"),
        ("陕西", "陕西省"),
        ("甘肃", "甘肃省"),
        ("青海", "青海省"),
        ("宁夏", "宁夏回族自治区"),
        ("新疆", "新疆维吾尔自治区"),
        ("台湾", "台湾省"),
        ("香港", "香港特别行政区"),
        ("澳门", "澳门特别行政区"),
    ])
});

#[doc = r#"
    짧은 지역 라벨(예: `北京`)을 지도용 정식 명칭(예: `北京市`)으로 바꾼다.

    표에 없는 라벨(해외, `未知` 등)은 `None` 이며 호출 측에서 해당 행을 제외해야 한다.
"#]
pub fn canonicalize_province(short_label: &str) -> Option<&'static str> {
    PROVINCE_MAPPING.get(short_label.trim()).copied()
}
