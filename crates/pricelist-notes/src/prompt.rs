//! Prompt for the notes request.

use crate::generator::NotesContext;

/// Formats the item lines: `- name (unit) - base price`.
pub fn item_lines(context: &NotesContext) -> String {
    context
        .items
        .iter()
        .map(|item| format!("- {} ({}) - {}", item.name, item.unit, item.main_price()))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Builds the Arabic instruction sent to the model.
pub fn build_prompt(context: &NotesContext) -> String {
    format!(
        "أنت مساعد أعمال ذكي. قم بكتابة \"ملاحظات وشروط\" احترافية لقائمة أسعار (Price List) باللغة العربية.\n\
         \n\
         المعلومات:\n\
         الشركة المرسلة: {company}\n\
         بعض المنتجات:\n\
         {items}\n\
         \n\
         المطلوب:\n\
         اكتب فقرة قصيرة مهذبة تشكر العملاء، وتوضح أن الأسعار قابلة للتغيير دون إشعار مسبق، أو أنها سارية لفترة محددة. وتتمنى التعاون المستقبلي.\n\
         اجعل النص رسمياً وجذاباً. لا تضع أي مقدمات، فقط النص النهائي للملاحظات.",
        company = context.company.name,
        items = item_lines(context),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pricelist_core::LineItem;

    #[test]
    fn test_prompt_lists_company_and_items() {
        let mut context = NotesContext::default();
        context.company.name = "Al Noor Trading".to_string();
        context.items = vec![
            LineItem::new("Rice", "sack", 40.0, 6.0),
            LineItem::new("Sugar", "sack", 50.0, 3.5),
        ];

        assert_eq!(item_lines(&context), "- Rice (sack) - 6\n- Sugar (sack) - 3.5");

        let prompt = build_prompt(&context);
        assert!(prompt.contains("Al Noor Trading"));
        assert!(prompt.contains("- Rice (sack) - 6"));
    }

    #[test]
    fn test_prompt_with_no_items() {
        let context = NotesContext::default();
        assert_eq!(item_lines(&context), "");
        assert!(!build_prompt(&context).is_empty());
    }
}
