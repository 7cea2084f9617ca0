use crate::{
    ast::Contains,
    error::{QueryError, Result},
    walker::{
        Apply, Block, WalkContext,
        block::{CONTAINS_MODE, KEY_EVENT_TYPE, KEY_TYPE},
    },
};

impl Apply for Contains {
    /// Switches the block to contains mode and writes `event_typeN` keys,
    /// numbered from the call-wide counter so several checks can share a block.
    fn apply(&self, ctx: &mut WalkContext, block: &mut Block) -> Result<()> {
        if block.contains_key(KEY_EVENT_TYPE) {
            return Err(QueryError::MutuallyExclusiveSelection);
        }

        block.insert(KEY_TYPE, CONTAINS_MODE);
        let first = ctx.reserve_event_types(self.types.len());
        for (offset, ty) in self.types.iter().enumerate() {
            block.insert(format!("{KEY_EVENT_TYPE}{}", first + offset), ty.as_str());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ast::EventType, value::Value};

    #[test]
    fn test_numbering_continues_across_checks() {
        let mut ctx = WalkContext::new();
        let mut block = Block::new();
        Contains::new(["fl", "cd"]).apply(&mut ctx, &mut block).unwrap();
        Contains::new(["ar"]).apply(&mut ctx, &mut block).unwrap();

        let expected: Block = [
            ("type", "contains"),
            ("event_type0", "fl"),
            ("event_type1", "cd"),
            ("event_type2", "ar"),
        ]
        .into_iter()
        .collect();
        assert_eq!(block, expected);
    }

    #[test]
    fn test_empty_check_only_sets_mode() {
        let mut block = Block::new();
        Contains::new(Vec::<String>::new())
            .apply(&mut WalkContext::new(), &mut block)
            .unwrap();
        assert_eq!(block.len(), 1);
        assert!(block.is_contains_mode());
    }

    #[test]
    fn test_rejects_in_either_order() {
        let mut block = Block::new();
        let mut ctx = WalkContext::new();
        EventType::new("ar").apply(&mut ctx, &mut block).unwrap();
        assert_eq!(
            Contains::new(["fl"]).apply(&mut ctx, &mut block),
            Err(QueryError::MutuallyExclusiveSelection)
        );

        let mut block = Block::new();
        Contains::new(["fl"]).apply(&mut ctx, &mut block).unwrap();
        assert_eq!(
            EventType::new("ar").apply(&mut ctx, &mut block),
            Err(QueryError::MutuallyExclusiveSelection)
        );
        assert_eq!(block.get("event_type"), None::<&Value>);
    }
}
